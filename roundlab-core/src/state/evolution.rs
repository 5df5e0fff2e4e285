//! Online weight evolution.
//!
//! Every 5th confirmed cycle (the orchestrator gates the cadence) the 50
//! most recent records carrying both a feature snapshot and a resolved
//! status are replayed. A snapshot feature whose signed contribution agreed
//! with the class that cycle predicted gets nudged: up on a win, down on a
//! loss. Adjustments accumulate across records and clamp once at the end.

use std::collections::BTreeMap;

use crate::domain::{History, OutcomeClass, Resolution};
use crate::model::{contribution_class, WeightVector};

const EVOLUTION_WINDOW: usize = 50;
const MIN_QUALIFYING: usize = 20;

pub fn evolve_weights(weights: &mut WeightVector, history: &History, learning_rate: f64) {
    let qualifying: Vec<_> = history
        .records()
        .iter()
        .filter(|r| r.snapshot.is_some() && r.status.is_resolved())
        .take(EVOLUTION_WINDOW)
        .collect();
    if qualifying.len() < MIN_QUALIFYING {
        return;
    }

    let mut adjustments: BTreeMap<String, f64> = BTreeMap::new();
    for record in qualifying {
        let Some(snapshot) = &record.snapshot else {
            continue;
        };
        let won = record.status == Resolution::Win;
        // The class this cycle predicted: the actual class on a win, its
        // opposite on a loss.
        let predicted = if won {
            record.class
        } else {
            record.class.opposite()
        };

        for (name, value) in snapshot.iter() {
            if contribution_class(value, weights.get(name)) != predicted {
                continue;
            }
            let delta = if won { learning_rate } else { -learning_rate };
            *adjustments.entry(name.to_string()).or_insert(0.0) += delta;
        }
    }

    for (name, delta) in adjustments {
        weights.adjust(&name, delta);
    }
    weights.clamp_all();
}

/// Confirmed-cycle cadence for tuning, evolution, and the sentiment step.
pub const EVOLUTION_CADENCE: u64 = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeRecord, RoundId};
    use crate::features::{names, FeatureVector};
    use crate::model::{WEIGHT_MAX, WEIGHT_MIN};

    fn snapshot(entries: &[(&str, f64)]) -> FeatureVector {
        let mut fv = FeatureVector::new();
        for (name, value) in entries {
            fv.insert(*name, *value);
        }
        fv
    }

    /// History of `count` records, all sharing one snapshot and status.
    /// `raw` controls the actual class (>=5 HIGH).
    fn uniform_history(
        count: usize,
        raw: u8,
        status: Resolution,
        fv: &FeatureVector,
    ) -> History {
        let mut history = History::new();
        for i in 0..count {
            let round = RoundId::new((i + 1).to_string()).unwrap();
            let mut record = OutcomeRecord::new(round, raw).unwrap();
            record.status = status;
            record.snapshot = Some(fv.clone());
            history.push(record);
        }
        history
    }

    #[test]
    fn skips_below_twenty_qualifying_records() {
        let fv = snapshot(&[(names::LAST_MOVE, 1.0)]);
        let history = uniform_history(19, 7, Resolution::Win, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert_eq!(weights.get(names::LAST_MOVE), 1.0);
    }

    #[test]
    fn wins_reinforce_aligned_features() {
        // Positive value, positive weight → contribution HIGH; records are
        // HIGH wins, so the prediction was HIGH: aligned, reinforced.
        let fv = snapshot(&[(names::LAST_MOVE, 1.0)]);
        let history = uniform_history(30, 7, Resolution::Win, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert!((weights.get(names::LAST_MOVE) - 1.3).abs() < 1e-9);
    }

    #[test]
    fn losses_penalize_aligned_features() {
        // HIGH losses: the prediction was LOW. A negative value points LOW,
        // so it was aligned with the (wrong) prediction and gets cut.
        let fv = snapshot(&[(names::LAST_MOVE, -1.0)]);
        let history = uniform_history(30, 7, Resolution::Loss, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert!((weights.get(names::LAST_MOVE) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn unaligned_features_untouched() {
        // HIGH wins (prediction HIGH) but the feature pointed LOW.
        let fv = snapshot(&[(names::LAST_MOVE, -1.0)]);
        let history = uniform_history(30, 7, Resolution::Win, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert_eq!(weights.get(names::LAST_MOVE), 1.0);
    }

    #[test]
    fn window_caps_at_fifty_records() {
        let fv = snapshot(&[(names::LAST_MOVE, 1.0)]);
        let history = uniform_history(80, 7, Resolution::Win, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        // 50 records * 0.01, not 80.
        assert!((weights.get(names::LAST_MOVE) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn cooldown_and_pending_records_never_qualify() {
        let fv = snapshot(&[(names::LAST_MOVE, 1.0)]);
        let history = uniform_history(40, 7, Resolution::Cooldown, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert_eq!(weights.get(names::LAST_MOVE), 1.0);
    }

    #[test]
    fn records_without_snapshot_never_qualify() {
        let mut history = History::new();
        for i in 0..40 {
            let round = RoundId::new((i + 1).to_string()).unwrap();
            let mut record = OutcomeRecord::new(round, 7).unwrap();
            record.status = Resolution::Win;
            history.push(record);
        }
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 0.01);
        assert_eq!(weights, WeightVector::new());
    }

    #[test]
    fn weights_clamp_after_the_pass() {
        // Absurd learning rate to force both clamp edges.
        let fv = snapshot(&[(names::LAST_MOVE, 1.0)]);
        let history = uniform_history(50, 7, Resolution::Win, &fv);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history, 1.0);
        assert_eq!(weights.get(names::LAST_MOVE), WEIGHT_MAX);

        let fv_low = snapshot(&[(names::LAST_MOVE, -1.0)]);
        let history_low = uniform_history(50, 7, Resolution::Loss, &fv_low);
        let mut weights = WeightVector::new();
        evolve_weights(&mut weights, &history_low, 1.0);
        assert_eq!(weights.get(names::LAST_MOVE), WEIGHT_MIN);
    }
}
