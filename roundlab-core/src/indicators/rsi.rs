//! Relative Strength Index (RSI), Wilder smoothing.
//!
//! Seed: average gain/loss over the first `period` chronological deltas.
//! Subsequent deltas smoothed with weight (period-1)/period.
//! Edge case: average loss exactly 0 → RSI = 100.

/// RSI at the most recent sample of a newest-first slice.
/// `None` if fewer than `period + 1` samples are available.
pub fn rsi(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period + 1 {
        return None;
    }
    let chronological: Vec<f64> = values.iter().rev().copied().collect();

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let delta = chronological[i] - chronological[i - 1];
        if delta > 0.0 {
            avg_gain += delta;
        } else {
            avg_loss -= delta;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    // Wilder: avg = (avg * (period - 1) + new) / period
    let carry = (period as f64 - 1.0) / period as f64;
    for i in (period + 1)..chronological.len() {
        let delta = chronological[i] - chronological[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = avg_gain * carry + gain / period as f64;
        avg_loss = avg_loss * carry + loss / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}
