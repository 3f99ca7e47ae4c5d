//! Pluggable digest capability and the built-in algorithms.

use crate::bits::to_binary_text;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// A digest function the pool can hash its content with.
///
/// Implementations must be deterministic and return at least one byte:
/// the same input always yields the same output bytes.
pub trait PoolHasher {
    /// Hashes `data` and returns the raw digest bytes.
    fn digest(&self, data: &[u8]) -> Vec<u8>;

    /// Short name used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Built-in hash algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 - 16-byte digest, the pool's historical default.
    #[default]
    Md5,
    /// SHA-1 - 20-byte digest.
    Sha1,
    /// SHA-256 - 32-byte digest.
    Sha256,
    /// BLAKE3 - 32-byte digest.
    Blake3,
}

impl HashAlgorithm {
    /// Returns the digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 | HashAlgorithm::Blake3 => 32,
        }
    }
}

impl PoolHasher for HashAlgorithm {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => md5::Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        }
    }

    fn name(&self) -> &str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can be fed to [`crate::EntropyPool::get_hash`].
///
/// Integers are hashed through their `0b...` text rendering, never their
/// byte layout.
#[derive(Debug, Clone, Copy)]
pub enum HashInput<'a> {
    /// An unsigned integer, rendered as binary text before hashing.
    Int(&'a BigUint),
    /// Text, hashed as its UTF-8 bytes.
    Text(&'a str),
}

impl HashInput<'_> {
    /// Hashes this input with `hasher`.
    pub fn hash_with(&self, hasher: &dyn PoolHasher) -> Vec<u8> {
        match self {
            HashInput::Int(value) => hasher.digest(to_binary_text(value).as_bytes()),
            HashInput::Text(text) => hasher.digest(text.as_bytes()),
        }
    }
}

impl<'a> From<&'a BigUint> for HashInput<'a> {
    fn from(value: &'a BigUint) -> Self {
        HashInput::Int(value)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        HashInput::Text(text)
    }
}
