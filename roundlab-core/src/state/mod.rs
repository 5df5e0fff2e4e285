//! Adaptive system parameters, self-tuning, and the defensive-mode risk
//! state machine.
//!
//! Two states, NORMAL and DEFENSIVE, evaluated reactively once per cycle.
//! The bad-trend threshold drifts under self-tuning but never leaves
//! [THRESHOLD_MIN, THRESHOLD_MAX].

pub mod evolution;

pub use evolution::evolve_weights;

use serde::{Deserialize, Serialize};

use crate::domain::{History, Resolution};

pub const THRESHOLD_MIN: f64 = 0.42;
pub const THRESHOLD_MAX: f64 = 0.48;

/// How far long-term accuracy must stray from target before tuning reacts.
const TUNING_BAND: f64 = 0.02;

/// Window and quorum for the NORMAL → DEFENSIVE transition.
const BAD_TREND_WINDOW: usize = 30;
const BAD_TREND_QUORUM: usize = 15;

/// Consecutive wins required to leave defensive mode.
const RECOVERY_WINS: usize = 3;

/// Process-lifetime tunables. Created once, mutated only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParams {
    /// Confirmed rounds required before the model runs at all.
    pub min_history: usize,
    /// Win-rate floor below which defensive mode engages.
    pub bad_trend_threshold: f64,
    /// Long-term accuracy the self-tuner steers toward.
    pub target_accuracy: f64,
    /// Threshold step per tuning reaction.
    pub evolution_step: f64,
    /// Per-record weight adjustment during evolution.
    pub learning_rate: f64,
    pub defensive_mode: bool,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            min_history: 100,
            bad_trend_threshold: 0.45,
            target_accuracy: 0.55,
            evolution_step: 0.005,
            learning_rate: 0.01,
            defensive_mode: false,
        }
    }
}

/// One reactive evaluation of the NORMAL/DEFENSIVE machine.
pub fn evaluate_risk_state(params: &mut SystemParams, history: &History) {
    if params.defensive_mode {
        // Leave only on a clean streak: the most recent RECOVERY_WINS
        // resolved statuses must all be wins.
        let mut wins = 0;
        for record in history.records() {
            match record.status {
                Resolution::Win => {
                    wins += 1;
                    if wins == RECOVERY_WINS {
                        params.defensive_mode = false;
                        return;
                    }
                }
                Resolution::Loss => return,
                Resolution::Pending | Resolution::Cooldown => {}
            }
        }
    } else {
        let recent = &history.records()[..history.len().min(BAD_TREND_WINDOW)];
        let resolved: Vec<Resolution> = recent
            .iter()
            .map(|r| r.status)
            .filter(|s| s.is_resolved())
            .collect();
        if resolved.len() < BAD_TREND_QUORUM {
            return;
        }
        let wins = resolved.iter().filter(|s| **s == Resolution::Win).count();
        let win_rate = wins as f64 / resolved.len() as f64;
        if win_rate < params.bad_trend_threshold {
            params.defensive_mode = true;
        }
    }
}

/// Threshold self-tuning against a long-term accuracy observation.
/// Underperformance raises the bad-trend threshold (defensive mode engages
/// sooner); overperformance lowers it. Always clamped.
pub fn tune_parameters(params: &mut SystemParams, long_term_accuracy: f64) {
    let gap = long_term_accuracy - params.target_accuracy;
    if gap < -TUNING_BAND {
        params.bad_trend_threshold =
            (params.bad_trend_threshold + params.evolution_step).min(THRESHOLD_MAX);
    } else if gap > TUNING_BAND {
        params.bad_trend_threshold =
            (params.bad_trend_threshold - params.evolution_step).max(THRESHOLD_MIN);
    }
}
