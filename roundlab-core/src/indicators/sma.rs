//! Simple Moving Average (SMA).
//!
//! Mean of the `period` most recent samples of a newest-first slice.

/// SMA over the first `period` elements. `None` if fewer than `period`
/// samples are available.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}
