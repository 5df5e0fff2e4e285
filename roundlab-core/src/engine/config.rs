//! Engine configuration — TOML-loadable, serde defaults throughout.

use serde::{Deserialize, Serialize};

use crate::state::SystemParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Master seed for the BLAKE3-derived randomness source.
    pub master_seed: u64,
    pub params: SystemParams,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
