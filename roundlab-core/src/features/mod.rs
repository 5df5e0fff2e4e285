//! Feature vector — the fixed named signal set the model scores.
//!
//! Names are stable identifiers shared between the extractor, the weight
//! table, and record snapshots. Four additional weight-table names are
//! reserved but never populated by the extractor (see `names::RESERVED`).

pub mod extract;
pub mod names;

pub use extract::extract;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named scalar features. BTreeMap keeps serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
