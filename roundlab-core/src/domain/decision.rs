//! Decision object — what one prediction cycle hands back to the caller.

use serde::{Deserialize, Serialize};

use super::OutcomeClass;

/// Identifies which advisory detector produced a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorId {
    RsiTrend,
    Stochastic,
    Pattern,
    VolatilityBreakout,
    PriceAction,
    MeanReversion,
}

impl AdvisorId {
    pub fn name(self) -> &'static str {
        match self {
            AdvisorId::RsiTrend => "rsi_trend",
            AdvisorId::Stochastic => "stochastic",
            AdvisorId::Pattern => "pattern",
            AdvisorId::VolatilityBreakout => "volatility_breakout",
            AdvisorId::PriceAction => "price_action",
            AdvisorId::MeanReversion => "mean_reversion",
        }
    }
}

/// A non-abstaining advisory vote. Abstention is the absence of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorySignal {
    pub advisor: AdvisorId,
    pub vote: OutcomeClass,
}

/// Cycle health flag carried on every decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Health {
    Ok,
    DefensiveMode,
    InsufficientHistory,
    ModelUncertain,
}

/// Output of one prediction cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub predicted: OutcomeClass,
    /// Composed confidence in 0..1.
    pub confidence: f64,
    /// Binary confidence flag; forced to 0 in defensive mode.
    pub confidence_level: u8,
    /// Label identifying how many advisors agreed, e.g. "ensemble 3/4".
    pub source: String,
    pub health: Health,
    /// Non-abstaining advisory votes, for observability.
    pub signals: Vec<AdvisorySignal>,
}
