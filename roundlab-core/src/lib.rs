//! RoundLab Core — sequential binary-outcome prediction pipeline.
//!
//! This crate contains the heart of the predictor:
//! - Domain types (round ids, outcome records, capped history, cycle memory)
//! - Indicator math over newest-first outcome windows (RSI, EMA, MACD, stddev)
//! - Feature extraction into a fixed named vector
//! - Primary weighted model with an evolving weight table
//! - Six-detector advisory ensemble and the consensus composer
//! - Defensive-mode risk state machine with parameter self-tuning
//! - Per-cycle orchestrator behind an injectable randomness seam
//!
//! The core performs no I/O; callers own the history and cycle memory.

pub mod advisors;
pub mod consensus;
pub mod domain;
pub mod engine;
pub mod features;
pub mod indicators;
pub mod model;
pub mod rng;
pub mod sentiment;
pub mod state;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything that crosses the caller boundary is
    /// Send + Sync, so the engine can live behind a worker thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::RoundId>();
        require_sync::<domain::RoundId>();
        require_send::<domain::OutcomeClass>();
        require_sync::<domain::OutcomeClass>();
        require_send::<domain::OutcomeRecord>();
        require_sync::<domain::OutcomeRecord>();
        require_send::<domain::History>();
        require_sync::<domain::History>();
        require_send::<domain::CycleMemory>();
        require_sync::<domain::CycleMemory>();
        require_send::<domain::Decision>();
        require_sync::<domain::Decision>();
        require_send::<domain::AdvisorySignal>();
        require_sync::<domain::AdvisorySignal>();
        require_send::<domain::Health>();
        require_sync::<domain::Health>();

        // Model and feature types
        require_send::<features::FeatureVector>();
        require_sync::<features::FeatureVector>();
        require_send::<model::WeightVector>();
        require_sync::<model::WeightVector>();

        // State and configuration
        require_send::<state::SystemParams>();
        require_sync::<state::SystemParams>();
        require_send::<sentiment::SentimentBook>();
        require_sync::<sentiment::SentimentBook>();
        require_send::<engine::EngineConfig>();
        require_sync::<engine::EngineConfig>();

        // The engine itself only needs Send: its randomness source is a
        // boxed `dyn Randomness` (Send, not Sync), and `&mut self` already
        // serializes invocations.
        require_send::<engine::Engine>();
    }
}
