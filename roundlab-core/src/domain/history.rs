//! Round history — ordered newest-first, capped.
//!
//! Every "last N" window in the core indexes this ordering directly, so the
//! newest-first invariant and the cap are load-bearing.

use serde::{Deserialize, Serialize};

use super::{OutcomeRecord, RoundId};

/// Maximum retained records; insertion beyond this evicts the oldest.
pub const HISTORY_CAP: usize = 150;

/// Newest-first sequence of outcome records, capped at [`HISTORY_CAP`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<OutcomeRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly resolved round at the front, evicting past the cap.
    pub fn push(&mut self, record: OutcomeRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAP);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, newest first.
    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    pub fn newest(&self) -> Option<&OutcomeRecord> {
        self.records.first()
    }

    pub fn find_mut(&mut self, round_id: &RoundId) -> Option<&mut OutcomeRecord> {
        self.records.iter_mut().find(|r| &r.round_id == round_id)
    }

    /// Raw outcomes as f64, newest first — the view every indicator and
    /// detector consumes.
    pub fn outcomes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.raw as f64).collect()
    }
}
