//! Stochastic %K reversal detector.
//!
//! %K = 100 * (latest - min) / (max - min) over the most recent 14 samples.
//! Overbought (>85) votes LOW, oversold (<15) votes HIGH — a reversal read.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};

const PERIOD: usize = 14;
const OVERBOUGHT: f64 = 85.0;
const OVERSOLD: f64 = 15.0;

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    if values.len() < PERIOD {
        return None;
    }
    let window = &values[..PERIOD];
    let max = window.iter().copied().fold(f64::MIN, f64::max);
    let min = window.iter().copied().fold(f64::MAX, f64::min);
    if max == min {
        return None;
    }

    let k = 100.0 * (values[0] - min) / (max - min);
    let vote = if k > OVERBOUGHT {
        OutcomeClass::Low
    } else if k < OVERSOLD {
        OutcomeClass::High
    } else {
        return None;
    };
    Some(AdvisorySignal {
        advisor: AdvisorId::Stochastic,
        vote,
    })
}
