//! MACD histogram — (EMA12 - EMA26) minus its own 9-period EMA signal line.

use super::ema::ema_series;

const FAST: usize = 12;
const SLOW: usize = 26;
const SIGNAL: usize = 9;

/// MACD histogram at the most recent sample of a newest-first slice.
/// `None` if fewer than 34 samples (25 warmup for the slow EMA + 9 for the
/// signal line).
pub fn macd_hist(values: &[f64]) -> Option<f64> {
    if values.len() < SLOW + SIGNAL - 1 {
        return None;
    }
    let chronological: Vec<f64> = values.iter().rev().copied().collect();

    let fast = ema_series(&chronological, FAST);
    let slow = ema_series(&chronological, SLOW);
    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();

    // MACD line is valid from the slow EMA's first sample onward; the signal
    // line is the EMA of that valid tail.
    let signal = ema_series(&macd[SLOW - 1..], SIGNAL);

    let line = *macd.last()?;
    let sig = *signal.last()?;
    if line.is_nan() || sig.is_nan() {
        return None;
    }
    Some(line - sig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn macd_hist_constant_series_is_zero() {
        let values = [5.0; 40];
        assert_approx(macd_hist(&values).unwrap(), 0.0, 1e-9);
    }

    #[test]
    fn macd_hist_positive_on_acceleration() {
        // Chronological series flat then rising: fast EMA pulls above slow,
        // and the histogram goes positive as the move is recent.
        let chronological: Vec<f64> = (0..50)
            .map(|i| if i < 40 { 5.0 } else { 5.0 + (i - 39) as f64 })
            .collect();
        let newest_first: Vec<f64> = chronological.into_iter().rev().collect();
        assert!(macd_hist(&newest_first).unwrap() > 0.0);
    }

    #[test]
    fn macd_hist_negative_on_decline() {
        let chronological: Vec<f64> = (0..50)
            .map(|i| if i < 40 { 9.0 } else { 9.0 - 0.5 * (i - 39) as f64 })
            .collect();
        let newest_first: Vec<f64> = chronological.into_iter().rev().collect();
        assert!(macd_hist(&newest_first).unwrap() < 0.0);
    }

    #[test]
    fn macd_hist_insufficient_data() {
        assert_eq!(macd_hist(&[1.0; 33]), None);
        assert!(macd_hist(&[1.0; 34]).is_some());
    }
}
