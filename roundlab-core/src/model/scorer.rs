//! Weighted accumulator scoring.
//!
//! Each feature feeds |value * weight| into the HIGH or LOW accumulator;
//! the sign rule decides which. A negative weight inverts the assignment.
//! Confidence = |HIGH - LOW| / (HIGH + LOW).

use crate::domain::OutcomeClass;
use crate::features::FeatureVector;

use super::WeightVector;

/// Non-abstaining output of the primary model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelScore {
    pub class: OutcomeClass,
    pub confidence: f64,
}

/// Which accumulator a feature value feeds given its weight.
///
/// Positive (or zero) weight: value > 0 points HIGH, value <= 0 points LOW.
/// Negative weight inverts the assignment. Weight evolution reuses this rule
/// to decide feature alignment.
pub fn contribution_class(value: f64, weight: f64) -> OutcomeClass {
    let base = if value > 0.0 {
        OutcomeClass::High
    } else {
        OutcomeClass::Low
    };
    if weight >= 0.0 {
        base
    } else {
        base.opposite()
    }
}

/// Score the feature vector. `None` means both accumulators are zero and the
/// model abstains; the orchestrator falls back to randomness at confidence 0.
pub fn score(features: &FeatureVector, weights: &WeightVector) -> Option<ModelScore> {
    let mut high = 0.0;
    let mut low = 0.0;

    for (name, value) in features.iter() {
        let weight = weights.get(name);
        let magnitude = (value * weight).abs();
        match contribution_class(value, weight) {
            OutcomeClass::High => high += magnitude,
            OutcomeClass::Low => low += magnitude,
        }
    }

    let total = high + low;
    if total == 0.0 {
        return None;
    }

    let class = if high >= low {
        OutcomeClass::High
    } else {
        OutcomeClass::Low
    };
    Some(ModelScore {
        class,
        confidence: (high - low).abs() / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::names;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    fn features(entries: &[(&str, f64)]) -> FeatureVector {
        let mut fv = FeatureVector::new();
        for (name, value) in entries {
            fv.insert(*name, *value);
        }
        fv
    }

    #[test]
    fn abstains_on_all_zero_features() {
        let fv = features(&[(names::RSI_STRENGTH, 0.0), (names::MACD_HIST, 0.0)]);
        assert_eq!(score(&fv, &WeightVector::new()), None);
    }

    #[test]
    fn positive_feature_votes_high() {
        let fv = features(&[(names::LAST_MOVE, 1.0)]);
        let s = score(&fv, &WeightVector::new()).unwrap();
        assert_eq!(s.class, OutcomeClass::High);
        assert_approx(s.confidence, 1.0, DEFAULT_EPSILON);
    }

    #[test]
    fn negative_weight_inverts_assignment() {
        let mut weights = WeightVector::new();
        weights.adjust(names::LAST_MOVE, -3.0); // 1.0 - 3.0 = -2.0
        let fv = features(&[(names::LAST_MOVE, 1.0)]);
        let s = score(&fv, &weights).unwrap();
        assert_eq!(s.class, OutcomeClass::Low);
    }

    #[test]
    fn confidence_is_normalized_margin() {
        // HIGH gets 3.0, LOW gets 1.0 → confidence = 2/4 = 0.5.
        let fv = features(&[
            (names::RSI_STRENGTH, 3.0),
            (names::LAST_MOVE, -1.0),
        ]);
        let s = score(&fv, &WeightVector::new()).unwrap();
        assert_eq!(s.class, OutcomeClass::High);
        assert_approx(s.confidence, 0.5, DEFAULT_EPSILON);
    }

    #[test]
    fn weights_scale_contributions() {
        let mut weights = WeightVector::new();
        weights.adjust(names::RSI_STRENGTH, 2.0); // weight 3.0
        // rsi 1.0 * 3.0 = 3.0 HIGH vs last_move 1.0 LOW → 0.5 confidence HIGH.
        let fv = features(&[
            (names::RSI_STRENGTH, 1.0),
            (names::LAST_MOVE, -1.0),
        ]);
        let s = score(&fv, &weights).unwrap();
        assert_eq!(s.class, OutcomeClass::High);
        assert_approx(s.confidence, 0.5, DEFAULT_EPSILON);
    }

    #[test]
    fn contribution_rule_matrix() {
        assert_eq!(contribution_class(1.0, 1.0), OutcomeClass::High);
        assert_eq!(contribution_class(-1.0, 1.0), OutcomeClass::Low);
        assert_eq!(contribution_class(0.0, 1.0), OutcomeClass::Low);
        assert_eq!(contribution_class(1.0, -1.0), OutcomeClass::Low);
        assert_eq!(contribution_class(-1.0, -1.0), OutcomeClass::High);
    }

    #[test]
    fn balanced_accumulators_report_zero_confidence() {
        let fv = features(&[
            (names::RSI_STRENGTH, 1.0),
            (names::LAST_MOVE, -1.0),
        ]);
        let s = score(&fv, &WeightVector::new()).unwrap();
        assert_approx(s.confidence, 0.0, DEFAULT_EPSILON);
    }
}
