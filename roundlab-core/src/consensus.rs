//! Consensus composer — folds the ensemble's agreement into the primary
//! model's confidence and derives the binary confidence level.

/// Composed confidence and its binary level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    pub confidence: f64,
    pub confidence_level: u8,
}

const LEVEL_THRESHOLD: f64 = 0.55;
const DEFENSIVE_DAMPING: f64 = 0.7;

/// `final = primary * (0.6 + 0.4 * consensus)`, damped by 0.7 in defensive
/// mode. The level flag is forced to 0 in defensive mode regardless of the
/// computed confidence.
pub fn compose(primary_confidence: f64, consensus_score: f64, defensive: bool) -> Composition {
    let mut confidence = primary_confidence * (0.6 + 0.4 * consensus_score);
    if defensive {
        confidence *= DEFENSIVE_DAMPING;
    }
    let confidence_level = if !defensive && confidence > LEVEL_THRESHOLD {
        1
    } else {
        0
    };
    Composition {
        confidence,
        confidence_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn full_agreement_keeps_full_confidence() {
        let c = compose(0.8, 1.0, false);
        assert_approx(c.confidence, 0.8, DEFAULT_EPSILON);
        assert_eq!(c.confidence_level, 1);
    }

    #[test]
    fn zero_agreement_scales_to_sixty_percent() {
        let c = compose(0.8, 0.0, false);
        assert_approx(c.confidence, 0.48, DEFAULT_EPSILON);
        assert_eq!(c.confidence_level, 0);
    }

    #[test]
    fn neutral_consensus_scales_to_eighty_percent() {
        let c = compose(1.0, 0.5, false);
        assert_approx(c.confidence, 0.8, DEFAULT_EPSILON);
    }

    #[test]
    fn defensive_damps_by_exactly_point_seven() {
        let normal = compose(0.9, 0.75, false);
        let defensive = compose(0.9, 0.75, true);
        assert_approx(
            defensive.confidence,
            normal.confidence * 0.7,
            DEFAULT_EPSILON,
        );
    }

    #[test]
    fn defensive_forces_level_zero_even_when_confident() {
        // 1.0 * 1.0 * 0.7 = 0.7 > 0.55, but defensive mode pins the level.
        let c = compose(1.0, 1.0, true);
        assert!(c.confidence > LEVEL_THRESHOLD);
        assert_eq!(c.confidence_level, 0);
    }

    #[test]
    fn level_threshold_is_strict() {
        // Exactly 0.55 is not above the threshold.
        let c = compose(0.55, 1.0, false);
        assert_approx(c.confidence, 0.55, DEFAULT_EPSILON);
        assert_eq!(c.confidence_level, 0);
    }
}
