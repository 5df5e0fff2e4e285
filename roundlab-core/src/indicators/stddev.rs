//! Sample standard deviation (Bessel-corrected, divide by n-1).

/// Standard deviation of the first `period` elements of a newest-first
/// slice. Requires at least 2 samples in the window; `None` otherwise.
pub fn stddev(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[..period];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (period as f64 - 1.0);
    Some(variance.sqrt())
}
