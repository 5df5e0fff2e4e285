//! Injectable randomness seam.
//!
//! Fallback predictions and the sentiment simulator draw from a `Randomness`
//! source owned by the engine. The production source is a `StdRng` whose
//! seed is derived from a master seed via BLAKE3, so the same master seed
//! replays the identical decision stream. Tests substitute a scripted source
//! to force either fallback branch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use crate::domain::OutcomeClass;

/// Randomness consumed by the engine. `Send` so the engine can move across
/// threads (invocations themselves stay serialized by `&mut self`).
pub trait Randomness: Send {
    /// Uniform HIGH/LOW choice for fallback predictions.
    fn coin_flip(&mut self) -> OutcomeClass;

    /// Uniform sample in [0, 1).
    fn unit(&mut self) -> f64;
}

/// Production source: BLAKE3-derived seed over a master seed.
#[derive(Debug, Clone)]
pub struct SeededRandomness {
    rng: StdRng,
}

impl SeededRandomness {
    pub fn new(master_seed: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"roundlab.engine");
        hasher.update(&master_seed.to_le_bytes());
        let hash = hasher.finalize();
        let seed = u64::from_le_bytes(
            hash.as_bytes()[..8]
                .try_into()
                .expect("BLAKE3 output is 32 bytes"),
        );
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Randomness for SeededRandomness {
    fn coin_flip(&mut self) -> OutcomeClass {
        if self.rng.gen_bool(0.5) {
            OutcomeClass::High
        } else {
            OutcomeClass::Low
        }
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Scripted source for deterministic tests. Pops queued values; when a queue
/// runs dry, flips return HIGH and units return 1.0 (which never triggers
/// probability gates).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomness {
    pub flips: VecDeque<OutcomeClass>,
    pub units: VecDeque<f64>,
}

impl ScriptedRandomness {
    pub fn with_flips(flips: impl IntoIterator<Item = OutcomeClass>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            units: VecDeque::new(),
        }
    }

    pub fn with_units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            flips: VecDeque::new(),
            units: units.into_iter().collect(),
        }
    }
}

impl Randomness for ScriptedRandomness {
    fn coin_flip(&mut self) -> OutcomeClass {
        self.flips.pop_front().unwrap_or(OutcomeClass::High)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(1.0)
    }
}
