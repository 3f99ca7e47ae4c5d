//! Pool configuration.
//!
//! Width, taps, rotation and hash are fixed for the lifetime of a pool.
//! They can be built in code or loaded from a TOML file.

use crate::conditioning::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default pool width in bits (512 bytes).
pub const DEFAULT_POOL_NBITS: usize = 4096;

/// Default stir tap exponents.
pub const DEFAULT_STIR_TAPS: [u32; 7] = [128, 104, 76, 51, 25, 1, 0];

/// Default right-rotation applied before each stir.
pub const DEFAULT_STIR_ROR_BY: usize = 7;

/// Configuration for an [`EntropyPool`](super::EntropyPool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Pool width in bits.
    pub nbits: usize,
    /// Hash used to extract output.
    pub hash: HashAlgorithm,
    /// Exponents applied to each stirred input, in order.
    pub stir_taps: Vec<u32>,
    /// Right rotation applied to the pool before the taps are mixed in.
    pub stir_ror_by: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            nbits: DEFAULT_POOL_NBITS,
            hash: HashAlgorithm::default(),
            stir_taps: DEFAULT_STIR_TAPS.to_vec(),
            stir_ror_by: DEFAULT_STIR_ROR_BY,
        }
    }
}

impl PoolConfig {
    /// Creates a default configuration with the given width.
    pub fn with_nbits(nbits: usize) -> Self {
        Self {
            nbits,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nbits == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PoolConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The pool width was zero.
    #[error("invalid pool width (must be at least 1 bit)")]
    InvalidWidth,
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The configuration text was not valid TOML for a pool.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
