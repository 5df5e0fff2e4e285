//! Adaptive weight table.
//!
//! Weights multiply feature values in the primary model and drift under
//! evolution, always clamped into [WEIGHT_MIN, WEIGHT_MAX].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::names;

pub const WEIGHT_MIN: f64 = 0.1;
pub const WEIGHT_MAX: f64 = 5.0;
const INITIAL_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    weights: BTreeMap<String, f64>,
}

impl Default for WeightVector {
    /// Seven extracted features plus the four reserved names, all at 1.0.
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        for name in names::EXTRACTED.iter().chain(names::RESERVED.iter()) {
            weights.insert((*name).to_string(), INITIAL_WEIGHT);
        }
        Self { weights }
    }
}

impl WeightVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for a feature; unknown names score at the initial weight.
    pub fn get(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(INITIAL_WEIGHT)
    }

    /// Accumulate an adjustment without clamping. Evolution sums deltas
    /// across records first and clamps once at the end of the pass.
    pub fn adjust(&mut self, name: &str, delta: f64) {
        *self
            .weights
            .entry(name.to_string())
            .or_insert(INITIAL_WEIGHT) += delta;
    }

    /// Restore the [WEIGHT_MIN, WEIGHT_MAX] invariant on every entry.
    pub fn clamp_all(&mut self) {
        for w in self.weights.values_mut() {
            *w = w.clamp(WEIGHT_MIN, WEIGHT_MAX);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
