//! Feature extraction — newest-first outcome window in, fixed-shape vector out.
//!
//! Deterministic given the window. No feature is ever undefined: indicators
//! lacking enough data contribute a neutral 0. The orchestrator gates the
//! minimum-history precondition; the extractor itself stays total.

use super::{names, FeatureVector};
use crate::indicators::{ema, macd_hist, rsi, sma, stddev};

const RSI_PERIOD: usize = 14;
const BAND_PERIOD: usize = 20;

/// Extract the seven model features from newest-first outcome values.
pub fn extract(values: &[f64]) -> FeatureVector {
    let mut fv = FeatureVector::new();

    let rsi14 = rsi(values, RSI_PERIOD);

    fv.insert(
        names::RSI_STRENGTH,
        rsi14.map(|r| (r - 50.0) / 50.0).unwrap_or(0.0),
    );
    fv.insert(
        names::RSI_IS_OVERBOUGHT,
        match rsi14 {
            Some(r) if r > 70.0 => 1.0,
            _ => 0.0,
        },
    );
    fv.insert(
        names::RSI_IS_OVERSOLD,
        match rsi14 {
            Some(r) if r < 30.0 => -1.0,
            _ => 0.0,
        },
    );

    fv.insert(names::MACD_HIST, macd_hist(values).unwrap_or(0.0));
    fv.insert(names::TREND_STRENGTH_SCORE, trend_strength(values));
    fv.insert(names::BOLLINGER_PCT_REVERSAL, bollinger_reversal(values));
    fv.insert(names::LAST_MOVE, last_move(values));

    fv
}

/// EMA5/EMA10/EMA20 alignment: +1 strong up, -1 strong down, 0 ranging or
/// insufficient data (needs 20 samples).
fn trend_strength(values: &[f64]) -> f64 {
    let (Some(e5), Some(e10), Some(e20)) = (ema(values, 5), ema(values, 10), ema(values, 20))
    else {
        return 0.0;
    };
    if e5 > e10 && e10 > e20 {
        1.0
    } else if e5 < e10 && e10 < e20 {
        -1.0
    } else {
        0.0
    }
}

/// %B overextension: %B - 1 above the band, %B below it, 0 inside.
fn bollinger_reversal(values: &[f64]) -> f64 {
    let (Some(mid), Some(sigma)) = (sma(values, BAND_PERIOD), stddev(values, BAND_PERIOD)) else {
        return 0.0;
    };
    if sigma == 0.0 {
        return 0.0;
    }
    let latest = values[0];
    let pct_b = (latest - (mid - 2.0 * sigma)) / (4.0 * sigma);
    if pct_b > 1.0 {
        pct_b - 1.0
    } else if pct_b < 0.0 {
        pct_b
    } else {
        0.0
    }
}

/// +1 if the latest value exceeds the one before it, else -1.
fn last_move(values: &[f64]) -> f64 {
    match (values.first(), values.get(1)) {
        (Some(latest), Some(prev)) if latest > prev => 1.0,
        _ => -1.0,
    }
}
