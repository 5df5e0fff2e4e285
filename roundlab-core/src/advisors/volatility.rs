//! Volatility breakout detector.
//!
//! Compares the sample std-dev of the most recent 20 outcomes against the
//! preceding 20. A jump past 1.8x reads as a breakout; the vote follows the
//! direction of the single most recent step.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};
use crate::indicators::stddev;

const WINDOW: usize = 20;
const EXPANSION: f64 = 1.8;

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    if values.len() < 2 * WINDOW {
        return None;
    }
    let recent = stddev(&values[..WINDOW], WINDOW)?;
    let prior = stddev(&values[WINDOW..2 * WINDOW], WINDOW)?;
    if prior == 0.0 || recent <= EXPANSION * prior {
        return None;
    }

    let vote = if values[0] > values[1] {
        OutcomeClass::High
    } else {
        OutcomeClass::Low
    };
    Some(AdvisorySignal {
        advisor: AdvisorId::VolatilityBreakout,
        vote,
    })
}
