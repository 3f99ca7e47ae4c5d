//! Emulated `/dev/random` Entropy Pool
//!
//! A deliberately simplified software model of a kernel entropy pool,
//! meant for study rather than for producing secrets.
//!
//! # Architecture
//!
//! ```text
//! add_entropy / timing events ──▶ stir ──▶ pool bits ──▶ hash ──▶ output
//!              │                    ▲                     │
//!              ▼                    └──── feedback ◀──────┘
//!         credit +1                                 debit −1 per request
//! ```
//!
//! # Design Principles
//!
//! - **Flat accounting**: one credit per input event, one debit per output
//!   request, whatever the sizes involved
//! - **Fail fast**: a request without credit errors out immediately and
//!   returns nothing
//! - **Pluggable hashing**: MD5 by default, SHA-1, SHA-256 and BLAKE3
//!   built in, or any [`PoolHasher`]
//! - **No cryptographic claims**: this is an emulation
//!
//! # Example
//!
//! ```
//! use devrandom_pool::{EntropyPool, PoolError};
//!
//! let mut pool = EntropyPool::default();
//! pool.add_entropy("keyboard mash", true)?;
//! pool.add_entropy_from_time_interval();
//!
//! let bytes = pool.get_random_bytes(24)?;
//! assert_eq!(bytes.len(), 24);
//! # Ok::<(), PoolError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod bits;
pub mod clock;
pub mod conditioning;
pub mod pool;

// Re-export commonly used types at crate root
pub use bits::{rol, ror};
pub use clock::{Clock, ManualClock, SystemClock};
pub use conditioning::{HashAlgorithm, HashInput, PoolHasher};
pub use pool::{ConfigError, EntropyInput, EntropyPool, PoolConfig, PoolError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
