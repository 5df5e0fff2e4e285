//! Numeric indicator primitives.
//!
//! All functions are pure, take a **newest-first** slice of raw outcomes,
//! and return `Option<f64>` — `None` means insufficient data and must be
//! propagated as abstention, never panicked on. Callers that need a
//! chronological recurrence (EMA, RSI) reverse internally.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stddev;

pub use ema::{ema, ema_series};
pub use macd::macd_hist;
pub use rsi::rsi;
pub use sma::sma;
pub use stddev::stddev;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
