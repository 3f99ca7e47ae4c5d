//! Values that can be stirred into the pool.

use super::error::PoolError;
use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;

/// Caller-supplied entropy, before it is reduced to an integer.
///
/// Text and byte strings are reduced by summing their characters or bytes.
/// The sum ignores order, so anagrams stir identically.
#[derive(Debug, Clone, PartialEq)]
pub enum EntropyInput {
    /// A signed integer, used as-is.
    Int(BigInt),
    /// Text, reduced to the sum of its Unicode scalar values.
    Text(String),
    /// Raw bytes, reduced to the sum of their values.
    Bytes(Vec<u8>),
    /// A float, truncated toward zero. NaN and infinities are rejected.
    Float(f64),
}

impl EntropyInput {
    /// Reduces the input to the integer that gets stirred.
    pub fn to_integer(&self) -> Result<BigInt, PoolError> {
        match self {
            EntropyInput::Int(value) => Ok(value.clone()),
            EntropyInput::Text(text) => Ok(BigInt::from(text_to_int(text))),
            EntropyInput::Bytes(bytes) => Ok(BigInt::from(bytes_to_int(bytes))),
            EntropyInput::Float(value) => BigInt::from_f64(*value)
                .ok_or_else(|| PoolError::InvalidInput(format!("float {value}"))),
        }
    }
}

/// Sums the code points of every character in `text`.
pub fn text_to_int(text: &str) -> u64 {
    text.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Sums the values of every byte in `bytes`.
pub fn bytes_to_int(bytes: &[u8]) -> u64 {
    bytes.iter().map(|&b| u64::from(b)).sum()
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for EntropyInput {
                fn from(value: $t) -> Self {
                    EntropyInput::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for EntropyInput {
    fn from(value: BigInt) -> Self {
        EntropyInput::Int(value)
    }
}

impl From<BigUint> for EntropyInput {
    fn from(value: BigUint) -> Self {
        EntropyInput::Int(BigInt::from(value))
    }
}

impl From<&str> for EntropyInput {
    fn from(text: &str) -> Self {
        EntropyInput::Text(text.to_owned())
    }
}

impl From<String> for EntropyInput {
    fn from(text: String) -> Self {
        EntropyInput::Text(text)
    }
}

impl From<&[u8]> for EntropyInput {
    fn from(bytes: &[u8]) -> Self {
        EntropyInput::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for EntropyInput {
    fn from(bytes: Vec<u8>) -> Self {
        EntropyInput::Bytes(bytes)
    }
}

impl From<f64> for EntropyInput {
    fn from(value: f64) -> Self {
        EntropyInput::Float(value)
    }
}

impl From<f32> for EntropyInput {
    fn from(value: f32) -> Self {
        EntropyInput::Float(f64::from(value))
    }
}
