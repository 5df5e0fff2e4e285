//! Price-action structure detector — higher highs / lower lows over the
//! four most recent outcomes.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};

const MIN_SAMPLES: usize = 5;

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    if values.len() < MIN_SAMPLES {
        return None;
    }
    let (p0, p1, p2, p3) = (values[0], values[1], values[2], values[3]);

    let vote = if p0 > p2 && p1 > p3 {
        // Higher high and higher low.
        OutcomeClass::High
    } else if p0 < p2 && p1 < p3 {
        OutcomeClass::Low
    } else {
        return None;
    };
    Some(AdvisorySignal {
        advisor: AdvisorId::PriceAction,
        vote,
    })
}
