//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = k * value[t] + (1 - k) * EMA[t-1], k = 2/(period+1).
//! Seed: SMA of the oldest `period` samples, then the recurrence runs
//! forward in time across the remainder of the window.

/// EMA at the most recent sample of a newest-first slice.
/// `None` if fewer than `period` samples are available.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);

    // Oldest `period` samples seed the average; the slice is newest-first,
    // so the seed window is the tail read backwards.
    let seed = values[values.len() - period..].iter().sum::<f64>() / period as f64;

    let mut current = seed;
    for &v in values[..values.len() - period].iter().rev() {
        current = v * k + current * (1.0 - k);
    }
    Some(current)
}

/// EMA series over a **chronological** slice, NaN during warmup.
/// Used by composed indicators (MACD) that need the EMA of a derived series.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period || period == 0 {
        return result;
    }

    let k = 2.0 / (period as f64 + 1.0);

    let mut sum = 0.0;
    for &v in values.iter().take(period) {
        if v.is_nan() {
            return result;
        }
        sum += v;
    }
    let seed = sum / period as f64;
    result[period - 1] = seed;

    let mut prev = seed;
    for i in period..n {
        if values[i].is_nan() {
            return result;
        }
        let current = values[i] * k + prev * (1.0 - k);
        result[i] = current;
        prev = current;
    }

    result
}
