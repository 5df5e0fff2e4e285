//! Mean-reversion detector — z-score of the latest outcome against its
//! 20-sample moving average.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};
use crate::indicators::{sma, stddev};

const WINDOW: usize = 20;
const Z_LIMIT: f64 = 1.5;

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    let mean = sma(values, WINDOW)?;
    let sigma = stddev(values, WINDOW)?;
    if sigma == 0.0 {
        return None;
    }

    let z = (values[0] - mean) / sigma;
    let vote = if z > Z_LIMIT {
        OutcomeClass::Low
    } else if z < -Z_LIMIT {
        OutcomeClass::High
    } else {
        return None;
    };
    Some(AdvisorySignal {
        advisor: AdvisorId::MeanReversion,
        vote,
    })
}
