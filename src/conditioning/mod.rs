//! Digest functions used to condition pool output.
//!
//! The pool never depends on a concrete hash. It talks to a
//! [`PoolHasher`], and [`HashAlgorithm`] supplies the built-in choices.

mod hash;

pub use hash::{HashAlgorithm, HashInput, PoolHasher};
