//! RSI-Trend detector — current RSI against its own 9-sample moving average.
//!
//! The moving average is built from RSI(14) over nine progressively-shifted
//! trailing windows. A gap of more than 2 points either way is a vote.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};
use crate::indicators::rsi;

const PERIOD: usize = 14;
const MA_LEN: usize = 9;
const GAP: f64 = 2.0;
/// 14 deltas need 15 samples; the deepest shift adds MA_LEN - 1 more.
const MIN_SAMPLES: usize = PERIOD + MA_LEN; // 23

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    if values.len() < MIN_SAMPLES {
        return None;
    }

    let mut sum = 0.0;
    let mut current = 0.0;
    for shift in 0..MA_LEN {
        let r = rsi(&values[shift..shift + PERIOD + 1], PERIOD)?;
        if shift == 0 {
            current = r;
        }
        sum += r;
    }
    let average = sum / MA_LEN as f64;

    let vote = if current > average + GAP {
        OutcomeClass::High
    } else if current < average - GAP {
        OutcomeClass::Low
    } else {
        return None;
    };
    Some(AdvisorySignal {
        advisor: AdvisorId::RsiTrend,
        vote,
    })
}
