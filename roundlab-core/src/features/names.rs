//! Stable feature and weight-table names.

pub const RSI_STRENGTH: &str = "rsi_strength";
pub const RSI_IS_OVERBOUGHT: &str = "rsi_is_overbought";
pub const RSI_IS_OVERSOLD: &str = "rsi_is_oversold";
pub const MACD_HIST: &str = "macd_hist";
pub const TREND_STRENGTH_SCORE: &str = "trend_strength_score";
pub const BOLLINGER_PCT_REVERSAL: &str = "bollinger_pct_reversal";
pub const LAST_MOVE: &str = "last_move";

/// The seven features the extractor populates, in a fixed order.
pub const EXTRACTED: [&str; 7] = [
    RSI_STRENGTH,
    RSI_IS_OVERBOUGHT,
    RSI_IS_OVERSOLD,
    MACD_HIST,
    TREND_STRENGTH_SCORE,
    BOLLINGER_PCT_REVERSAL,
    LAST_MOVE,
];

/// Weight-table names with no extractor counterpart. They stay in the weight
/// table (and clamp like any other weight) but no snapshot ever carries them,
/// so evolution never adjusts them. Kept deliberately unwired.
pub const RESERVED: [&str; 4] = [
    "market_sentiment",
    "volatility_expansion",
    "stochastic_k",
    "rsi_trend_strength",
];
