//! Orchestrator — one call, one prediction cycle.
//!
//! The engine owns all process-lifetime mutable state (weight table, system
//! parameters, sentiment book, randomness source) as an explicit object.
//! Callers own the history and the shared cycle memory and must serialize
//! invocations; `&mut self` makes the single-writer discipline a compile-time
//! fact. The core performs no I/O.

pub mod config;

pub use config::EngineConfig;

use crate::advisors;
use crate::consensus;
use crate::domain::{
    CycleMemory, Decision, Health, History, OutcomeClass, Resolution,
};
use crate::features::{self, FeatureVector};
use crate::model::{self, WeightVector};
use crate::rng::{Randomness, SeededRandomness};
use crate::sentiment::SentimentBook;
use crate::state::evolution::EVOLUTION_CADENCE;
use crate::state::{evaluate_risk_state, evolve_weights, tune_parameters, SystemParams};

pub struct Engine {
    params: SystemParams,
    weights: WeightVector,
    sentiment: SentimentBook,
    rng: Box<dyn Randomness>,
    /// Confirmed cycles processed; drives the every-5th evolution cadence.
    cycles: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_randomness(
            config.params,
            Box::new(SeededRandomness::new(config.master_seed)),
        )
    }

    /// Injection seam for deterministic tests.
    pub fn with_randomness(params: SystemParams, rng: Box<dyn Randomness>) -> Self {
        Self {
            params,
            weights: WeightVector::new(),
            sentiment: SentimentBook::new(),
            rng,
            cycles: 0,
        }
    }

    pub fn params(&self) -> &SystemParams {
        &self.params
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn sentiment(&self) -> &SentimentBook {
        &self.sentiment
    }

    /// Run one prediction cycle against the newest-first history and the
    /// shared cycle memory. The caller appends the freshly resolved round
    /// before invoking.
    pub fn run_cycle(&mut self, history: &mut History, memory: &mut CycleMemory) -> Decision {
        // (a) Minimum-history gate: random fallback, nothing else runs.
        if history.len() < self.params.min_history {
            return Decision {
                predicted: self.rng.coin_flip(),
                confidence: 0.0,
                confidence_level: 0,
                source: "fallback/insufficient-history".into(),
                health: Health::InsufficientHistory,
                signals: Vec::new(),
            };
        }
        self.cycles += 1;

        // (b) Every 5th confirmed cycle: self-tuning, weight evolution, and
        // the sentiment step.
        if self.cycles % EVOLUTION_CADENCE == 0 {
            if let Some(accuracy) = memory.long_term_global_accuracy {
                tune_parameters(&mut self.params, accuracy);
            }
            evolve_weights(&mut self.weights, history, self.params.learning_rate);
            self.sentiment.update(self.rng.as_mut());
        }

        // (c) Score the previous cycle's prediction, then re-evaluate the
        // risk state on the updated history.
        self.settle_pending(history, memory);
        evaluate_risk_state(&mut self.params, history);

        // (d) Features and the primary model.
        let outcomes = history.outcomes();
        let features = features::extract(&outcomes);
        let Some(score) = model::score(&features, &self.weights) else {
            let predicted = self.rng.coin_flip();
            // An uncertain fallback is remembered as a placeholder so its
            // resolution is scored Cooldown, not Win/Loss.
            self.remember(memory, history, predicted, 0, None, true);
            return Decision {
                predicted,
                confidence: 0.0,
                confidence_level: 0,
                source: "fallback/model-uncertain".into(),
                health: Health::ModelUncertain,
                signals: Vec::new(),
            };
        };

        // (e) Ensemble votes and the composed confidence.
        let signals = advisors::run_all(&outcomes);
        let consensus_score = advisors::consensus_score(&signals, score.class);
        let composed =
            consensus::compose(score.confidence, consensus_score, self.params.defensive_mode);

        let agreeing = signals.iter().filter(|s| s.vote == score.class).count();
        let health = if self.params.defensive_mode {
            Health::DefensiveMode
        } else {
            Health::Ok
        };

        // (f) Emit and remember for the next cycle.
        self.remember(
            memory,
            history,
            score.class,
            composed.confidence_level,
            Some(features),
            false,
        );
        Decision {
            predicted: score.class,
            confidence: composed.confidence,
            confidence_level: composed.confidence_level,
            source: format!("ensemble {agreeing}/{}", signals.len()),
            health,
            signals,
        }
    }

    /// Resolve the previous cycle's prediction if the round it targeted has
    /// arrived: write Win/Loss/Cooldown into that record, attach the feature
    /// snapshot for evolution, and record the actual outcome in memory.
    fn settle_pending(&mut self, history: &mut History, memory: &mut CycleMemory) {
        let Some(pending) = memory.pending_round.take() else {
            return;
        };
        let predicted = memory.last_predicted_outcome;
        let placeholder = memory.pending_is_placeholder;
        let snapshot = memory.pending_snapshot.take();

        let Some(record) = history.find_mut(&pending) else {
            return; // round never arrived; stale prediction dropped
        };
        if record.status != Resolution::Pending {
            return;
        }
        record.status = if placeholder {
            Resolution::Cooldown
        } else if predicted == Some(record.class) {
            Resolution::Win
        } else {
            Resolution::Loss
        };
        record.snapshot = snapshot;
        memory.last_actual_outcome = Some(record.raw as f64);
    }

    fn remember(
        &self,
        memory: &mut CycleMemory,
        history: &History,
        predicted: OutcomeClass,
        confidence_level: u8,
        snapshot: Option<FeatureVector>,
        placeholder: bool,
    ) {
        memory.last_predicted_outcome = Some(predicted);
        memory.last_confidence_level = confidence_level;
        memory.pending_snapshot = snapshot;
        memory.pending_is_placeholder = placeholder;
        memory.pending_round = history.newest().map(|r| r.round_id.next());
    }
}
