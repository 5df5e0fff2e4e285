//! Advisory ensemble — six independent heuristic detectors.
//!
//! Each detector is a pure function over the newest-first outcome window
//! with the same signature, returning `Some(AdvisorySignal)` to vote or
//! `None` to abstain. The set is closed and composed by one aggregator;
//! no dynamic dispatch.

pub mod mean_reversion;
pub mod pattern;
pub mod price_action;
pub mod rsi_trend;
pub mod stochastic;
pub mod volatility;

use crate::domain::{AdvisorySignal, OutcomeClass};

/// Run every detector, collecting the non-abstaining votes in detector order.
pub fn run_all(values: &[f64]) -> Vec<AdvisorySignal> {
    [
        rsi_trend::evaluate(values),
        stochastic::evaluate(values),
        pattern::evaluate(values),
        volatility::evaluate(values),
        price_action::evaluate(values),
        mean_reversion::evaluate(values),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Fraction of non-abstaining advisors agreeing with the primary class.
/// Exactly 0.5 (neutral) when zero advisors voted — not a tie-break.
pub fn consensus_score(signals: &[AdvisorySignal], primary: OutcomeClass) -> f64 {
    if signals.is_empty() {
        return 0.5;
    }
    let agreeing = signals.iter().filter(|s| s.vote == primary).count();
    agreeing as f64 / signals.len() as f64
}
