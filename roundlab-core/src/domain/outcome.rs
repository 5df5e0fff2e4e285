//! Outcome records — the fundamental unit of round history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DomainError, RoundId};
use crate::features::FeatureVector;

/// Largest raw outcome value; outcomes live in 0..=RAW_OUTCOME_MAX.
pub const RAW_OUTCOME_MAX: u8 = 9;

/// The two mutually exclusive outcome classes, split at the range midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeClass {
    High,
    Low,
}

impl OutcomeClass {
    /// Fixed midpoint split: 5..=9 → High, 0..=4 → Low.
    pub fn from_raw(raw: u8) -> Self {
        Self::from_numeric(raw as f64)
    }

    /// Midpoint split over a numeric value (detectors see outcomes as f64).
    pub fn from_numeric(value: f64) -> Self {
        if value >= 5.0 {
            OutcomeClass::High
        } else {
            OutcomeClass::Low
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            OutcomeClass::High => OutcomeClass::Low,
            OutcomeClass::Low => OutcomeClass::High,
        }
    }
}

/// Resolution status of a predicted round.
///
/// `Cooldown` marks rounds whose prediction was a randomized placeholder;
/// those resolutions never feed the win-rate or weight evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Pending,
    Win,
    Loss,
    Cooldown,
}

impl Resolution {
    /// Win or Loss — the statuses that count toward performance windows.
    pub fn is_resolved(self) -> bool {
        matches!(self, Resolution::Win | Resolution::Loss)
    }
}

/// One resolved round: raw outcome, derived class, and prediction bookkeeping.
///
/// Only `status` and `snapshot` are ever touched after construction, both by
/// the orchestrator when the cycle that predicted this round is scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub round_id: RoundId,
    pub raw: u8,
    pub class: OutcomeClass,
    pub status: Resolution,
    pub created_at: DateTime<Utc>,
    /// Feature vector the model saw when predicting this round, attached at
    /// scoring time so weight evolution can replay the cycle.
    pub snapshot: Option<FeatureVector>,
}

impl OutcomeRecord {
    pub fn new(round_id: RoundId, raw: u8) -> Result<Self, DomainError> {
        if raw > RAW_OUTCOME_MAX {
            return Err(DomainError::OutcomeOutOfRange(raw));
        }
        Ok(Self {
            round_id,
            raw,
            class: OutcomeClass::from_raw(raw),
            status: Resolution::Pending,
            created_at: Utc::now(),
            snapshot: None,
        })
    }
}
