//! Sentiment simulator — an independent stochastic bias process.
//!
//! The book holds decaying events; each update decays every impact by 10%,
//! prunes the negligible ones, and occasionally spawns a fresh ±1.0 event.
//! The aggregate is exposed for observability but deliberately NOT wired
//! into the feature vector (the `market_sentiment` weight stays reserved).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::OutcomeClass;
use crate::rng::Randomness;

pub const DECAY: f64 = 0.90;
pub const PRUNE_BELOW: f64 = 0.05;
pub const SPAWN_PROBABILITY: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEvent {
    pub impact: f64,
    pub created_at: DateTime<Utc>,
}

/// Unordered, self-pruning collection of sentiment events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentBook {
    events: Vec<SentimentEvent>,
}

impl SentimentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// One simulator step: decay, prune, maybe spawn.
    pub fn update(&mut self, rng: &mut dyn Randomness) {
        for event in &mut self.events {
            event.impact *= DECAY;
        }
        self.events.retain(|e| e.impact.abs() > PRUNE_BELOW);

        if rng.unit() < SPAWN_PROBABILITY {
            let impact = match rng.coin_flip() {
                OutcomeClass::High => 1.0,
                OutcomeClass::Low => -1.0,
            };
            self.events.push(SentimentEvent {
                impact,
                created_at: Utc::now(),
            });
        }
    }

    /// Sum of current impacts, clamped to [-1, 1].
    pub fn aggregate(&self) -> f64 {
        self.events
            .iter()
            .map(|e| e.impact)
            .sum::<f64>()
            .clamp(-1.0, 1.0)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
