//! Errors raised by pool operations.

use super::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while feeding or draining the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The input could not be turned into an integer to stir with.
    #[error("expected an integer-coercible value, got {0}")]
    InvalidInput(String),
    /// No entropy credit is left; add entropy and retry.
    #[error("not enough entropy: must wait for more entropy to arrive")]
    NotEnoughEntropy,
    /// The pool configuration was rejected.
    #[error("invalid pool configuration: {0}")]
    Config(#[from] ConfigError),
}
