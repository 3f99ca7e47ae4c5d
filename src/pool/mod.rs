//! The entropy pool and everything needed to configure and feed it.

mod config;
mod entropy_pool;
mod error;
mod input;

pub use config::{
    ConfigError, PoolConfig, DEFAULT_POOL_NBITS, DEFAULT_STIR_ROR_BY, DEFAULT_STIR_TAPS,
};
pub use entropy_pool::EntropyPool;
pub use error::PoolError;
pub use input::{bytes_to_int, text_to_int, EntropyInput};
