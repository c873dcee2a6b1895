// Configuration for the inventory and the demo binary

use std::{fs, path::Path};

use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    // Seed for randomized room capacity. None draws from OS entropy.
    pub seed: Option<u64>,
    // Fallback log filter when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
