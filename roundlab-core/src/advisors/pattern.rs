//! Categorical pattern detector.
//!
//! The most recent 10 outcomes map to a chronological class-letter string
//! (B = HIGH, S = LOW). Rules are checked in order, first match wins.
//! Run rules discriminate on the exact trailing run length — four in a row
//! reads as continuation, five or more as a streak break — so `BBBB` and
//! `BBBBB` never shadow each other. Shape rules match as chronological
//! suffixes.

use crate::domain::{AdvisorId, AdvisorySignal, OutcomeClass};

const WINDOW: usize = 10;
const MIN_SAMPLES: usize = 5;

/// Suffix-shape rules, checked after the run rules, in order.
const SHAPES: [(&str, OutcomeClass); 6] = [
    ("BSBS", OutcomeClass::High),
    ("SBSB", OutcomeClass::Low),
    ("BBSBB", OutcomeClass::High),
    ("SSBSS", OutcomeClass::Low),
    ("BSB", OutcomeClass::Low),
    ("SBS", OutcomeClass::High),
];

pub fn evaluate(values: &[f64]) -> Option<AdvisorySignal> {
    if values.len() < MIN_SAMPLES {
        return None;
    }
    let window = &values[..values.len().min(WINDOW)];
    // Chronological order: oldest of the window first.
    let sequence: String = window.iter().rev().map(letter).collect();

    let vote = match_rules(&sequence)?;
    Some(AdvisorySignal {
        advisor: AdvisorId::Pattern,
        vote,
    })
}

fn letter(value: &f64) -> char {
    match OutcomeClass::from_numeric(*value) {
        OutcomeClass::High => 'B',
        OutcomeClass::Low => 'S',
    }
}

fn match_rules(sequence: &str) -> Option<OutcomeClass> {
    let bytes = sequence.as_bytes();
    let last = *bytes.last()?;
    let run = bytes.iter().rev().take_while(|&&b| b == last).count();

    // Run rules: BBBB/SSSS continuation, BBBBB/SSSSS break.
    match (last, run) {
        (b'B', 4) => return Some(OutcomeClass::High),
        (b'S', 4) => return Some(OutcomeClass::Low),
        (b'B', r) if r >= 5 => return Some(OutcomeClass::Low),
        (b'S', r) if r >= 5 => return Some(OutcomeClass::High),
        _ => {}
    }

    for (shape, vote) in SHAPES {
        if sequence.ends_with(shape) {
            return Some(vote);
        }
    }
    None
}
