//! Domain types for RoundLab

pub mod decision;
pub mod history;
pub mod memory;
pub mod outcome;
pub mod round;

pub use decision::{AdvisorId, AdvisorySignal, Decision, Health};
pub use history::{History, HISTORY_CAP};
pub use memory::CycleMemory;
pub use outcome::{OutcomeClass, OutcomeRecord, Resolution, RAW_OUTCOME_MAX};
pub use round::RoundId;

use thiserror::Error;

/// Structural contract violations. The only fatal conditions in the core:
/// everything past record construction abstains instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("round id must be non-empty decimal digits, got {0:?}")]
    InvalidRoundId(String),
    #[error("raw outcome {0} outside 0..={RAW_OUTCOME_MAX}")]
    OutcomeOutOfRange(u8),
}
