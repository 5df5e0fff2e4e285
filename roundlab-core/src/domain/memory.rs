//! Shared cycle memory — the one state block that crosses the collaborator
//! boundary besides the history itself.
//!
//! The request layer owns this record and hands it back on every cycle; the
//! engine scores the previous cycle's prediction from it and stores the new
//! one for the next cycle. Field names follow the wire contract (camelCase).

use serde::{Deserialize, Serialize};

use super::{OutcomeClass, RoundId};
use crate::features::FeatureVector;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleMemory {
    /// Raw outcome of the last round the engine scored.
    pub last_actual_outcome: Option<f64>,
    /// Class predicted on the previous cycle.
    pub last_predicted_outcome: Option<OutcomeClass>,
    /// Binary confidence level of the previous cycle (0 or 1).
    pub last_confidence_level: u8,
    /// Long-term accuracy observation supplied by the collaborator, if any.
    /// Drives parameter self-tuning; absent means no tuning this cycle.
    pub long_term_global_accuracy: Option<f64>,
    /// Round the previous prediction targeted, awaiting resolution.
    pub pending_round: Option<RoundId>,
    /// Feature vector behind the pending prediction, replayed into the
    /// resolved record for weight evolution.
    pub pending_snapshot: Option<FeatureVector>,
    /// True when the pending prediction was a randomized placeholder; its
    /// resolution is scored Cooldown instead of Win/Loss.
    pub pending_is_placeholder: bool,
}
