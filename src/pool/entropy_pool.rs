//! The entropy pool state machine.
//!
//! Input side: every event is reduced to an integer and stirred into the
//! pool (rotate, then XOR in one power of the input per tap), usually
//! earning one entropy credit. Output side: each byte request spends one
//! credit, then hashes the pool as many times as needed, stirring every
//! digest back in so that the next hash differs.

use super::config::PoolConfig;
use super::error::PoolError;
use super::input::{bytes_to_int, EntropyInput};
use crate::bits::{mask, ror};
use crate::clock::{Clock, SystemClock};
use crate::conditioning::{HashInput, PoolHasher};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// A simplified `/dev/random` style entropy pool.
///
/// Credits are counted per event rather than estimated: every credited
/// input adds one, every output request removes one regardless of length.
///
/// All mutating operations take `&mut self`. Sharing a pool across
/// threads requires the caller to serialize access, e.g. with a `Mutex`.
pub struct EntropyPool {
    /// Pool width in bits.
    nbits: usize,
    /// Pool bits, always below `2^nbits`.
    content: BigUint,
    /// `2^nbits - 1`.
    bit_mask: BigUint,
    /// `2^nbits`.
    modulus: BigUint,
    /// Outstanding entropy credits.
    entropy_count: u64,
    /// Clock reading of the last timing event, in microseconds.
    last_request_micros: i64,
    stir_taps: Vec<u32>,
    stir_ror_by: usize,
    hasher: Box<dyn PoolHasher + Send>,
    clock: Box<dyn Clock + Send>,
    /// Total stirs performed.
    total_stirs: u64,
    /// Total digests extracted.
    total_extractions: u64,
}

impl EntropyPool {
    /// Creates a pool from `config`, hashing with `config.hash` and timing
    /// events with the system clock.
    ///
    /// The pool is seeded with one timing event, so it starts with one
    /// credit.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let hasher = Box::new(config.hash);
        Self::with_components(config, hasher, Box::new(SystemClock))
    }

    /// Creates a pool with a caller-supplied hasher and clock.
    ///
    /// `config.hash` is ignored in favour of `hasher`.
    pub fn with_components(
        config: PoolConfig,
        hasher: Box<dyn PoolHasher + Send>,
        clock: Box<dyn Clock + Send>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::assemble(config, hasher, clock))
    }

    fn assemble(
        config: PoolConfig,
        hasher: Box<dyn PoolHasher + Send>,
        clock: Box<dyn Clock + Send>,
    ) -> Self {
        let PoolConfig {
            nbits,
            stir_taps,
            stir_ror_by,
            ..
        } = config;

        let mut pool = Self {
            nbits,
            content: BigUint::zero(),
            bit_mask: mask(nbits),
            modulus: BigUint::one() << nbits,
            entropy_count: 0,
            last_request_micros: 0,
            stir_taps,
            stir_ror_by,
            hasher,
            clock,
            total_stirs: 0,
            total_extractions: 0,
        };

        tracing::info!(
            nbits = pool.nbits,
            hash = pool.hasher.name(),
            taps = ?pool.stir_taps,
            ror = pool.stir_ror_by,
            "Entropy pool created"
        );

        pool.add_entropy_from_time_interval();
        pool
    }

    /// Stirs `input` into the pool, crediting one unit of entropy if
    /// `credit_entropy` is set.
    ///
    /// On [`PoolError::InvalidInput`] the pool is left untouched.
    pub fn add_entropy(
        &mut self,
        input: impl Into<EntropyInput>,
        credit_entropy: bool,
    ) -> Result<(), PoolError> {
        let value = input.into().to_integer()?;
        self.mix(&value, credit_entropy);
        Ok(())
    }

    /// Stirs in the time elapsed since the previous timing event.
    ///
    /// The interval is measured in whole microseconds and always credits
    /// one unit. Clock readings that go backwards count as a zero interval.
    pub fn add_entropy_from_time_interval(&mut self) {
        let now = self.clock.now_micros().max(self.last_request_micros);
        let interval = now - self.last_request_micros;

        self.mix(&BigInt::from(interval), true);
        self.last_request_micros = now;

        tracing::trace!(interval_us = interval, "Timing entropy added");
    }

    fn mix(&mut self, value: &BigInt, credit_entropy: bool) {
        self.stir(value);
        if credit_entropy {
            self.credit_entropy();
        }
    }

    /// Adds one entropy credit.
    pub fn credit_entropy(&mut self) {
        self.entropy_count += 1;
        tracing::trace!(entropy_count = self.entropy_count, "Entropy credited");
    }

    /// Spends one entropy credit.
    ///
    /// Fails with [`PoolError::NotEnoughEntropy`] when no credit is left;
    /// the count stays at zero so a later credit makes the next debit
    /// succeed.
    pub fn debit_entropy(&mut self) -> Result<(), PoolError> {
        match self.entropy_count.checked_sub(1) {
            Some(remaining) => {
                self.entropy_count = remaining;
                Ok(())
            }
            None => {
                tracing::warn!("Entropy debit refused, pool has no credit");
                Err(PoolError::NotEnoughEntropy)
            }
        }
    }

    /// Mixes `input` into the pool.
    ///
    /// The pool is rotated right by `stir_ror_by` within its width, then
    /// `input^t mod 2^nbits` is XORed in for every tap `t`. Negative inputs
    /// are reduced modulo `2^nbits` first, which matches two's-complement
    /// masking.
    pub fn stir(&mut self, input: &BigInt) {
        self.content = ror(&self.content, self.stir_ror_by, self.nbits);

        let base = self.reduce(input);
        for &tap in &self.stir_taps {
            let term = if tap == 0 {
                BigUint::one() & &self.bit_mask
            } else {
                base.modpow(&BigUint::from(tap), &self.modulus)
            };
            self.content ^= term;
        }

        self.total_stirs += 1;
    }

    /// Floor-reduces `value` into `[0, 2^nbits)`.
    fn reduce(&self, value: &BigInt) -> BigUint {
        let modulus = BigInt::from(self.modulus.clone());
        let mut residue = value % &modulus;
        if residue.sign() == Sign::Minus {
            residue += &modulus;
        }
        let (_, magnitude) = residue.into_parts();
        magnitude
    }

    /// Hashes `data` with the pool's hasher.
    ///
    /// Integers are hashed via their `0b...` text rendering.
    pub fn get_hash<'a>(&self, data: impl Into<HashInput<'a>>) -> Vec<u8> {
        data.into().hash_with(self.hasher.as_ref())
    }

    /// Hashes the pool, stirs the digest back in without credit, and
    /// returns the digest.
    pub fn extract_from_pool(&mut self) -> Vec<u8> {
        let digest = self.get_hash(&self.content);
        self.mix(&BigInt::from(bytes_to_int(&digest)), false);
        self.total_extractions += 1;
        digest
    }

    /// Returns exactly `nbytes` bytes of pool output.
    ///
    /// Costs one credit per call whatever the length. Fails with
    /// [`PoolError::NotEnoughEntropy`] before producing anything when no
    /// credit is available.
    pub fn get_random_bytes(&mut self, nbytes: usize) -> Result<Vec<u8>, PoolError> {
        self.debit_entropy()?;

        let mut result = Vec::with_capacity(nbytes);
        while result.len() < nbytes {
            let block = self.extract_from_pool();
            if block.is_empty() {
                tracing::warn!(hash = self.hasher.name(), "Hasher returned an empty digest");
                break;
            }
            let take = (nbytes - result.len()).min(block.len());
            result.extend_from_slice(&block[..take]);
        }

        tracing::debug!(
            nbytes,
            entropy_count = self.entropy_count,
            extractions = self.total_extractions,
            "Random bytes produced"
        );

        Ok(result)
    }

    /// Fills `dest` with pool output at the cost of one credit.
    ///
    /// `dest` is left untouched on failure.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), PoolError> {
        let bytes = self.get_random_bytes(dest.len())?;
        dest[..bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }

    /// Returns the pool width in bits.
    #[inline]
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Returns the pool content.
    #[inline]
    pub fn content(&self) -> &BigUint {
        &self.content
    }

    /// Returns the outstanding entropy credits.
    #[inline]
    pub fn entropy_count(&self) -> u64 {
        self.entropy_count
    }

    /// Returns the clock reading of the last timing event, in microseconds.
    #[inline]
    pub fn last_request_micros(&self) -> i64 {
        self.last_request_micros
    }

    /// Returns the stir tap exponents.
    #[inline]
    pub fn stir_taps(&self) -> &[u32] {
        &self.stir_taps
    }

    /// Returns the per-stir rotation.
    #[inline]
    pub fn stir_ror_by(&self) -> usize {
        self.stir_ror_by
    }

    /// Returns the total number of stirs performed.
    #[inline]
    pub fn total_stirs(&self) -> u64 {
        self.total_stirs
    }

    /// Returns the total number of digests extracted.
    #[inline]
    pub fn total_extractions(&self) -> u64 {
        self.total_extractions
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        let config = PoolConfig::default();
        let hasher = Box::new(config.hash);
        Self::assemble(config, hasher, Box::new(SystemClock))
    }
}

impl std::fmt::Debug for EntropyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyPool")
            .field("nbits", &self.nbits)
            .field("entropy_count", &self.entropy_count)
            .field("hash", &self.hasher.name())
            .field("stir_taps", &self.stir_taps)
            .field("stir_ror_by", &self.stir_ror_by)
            .finish_non_exhaustive()
    }
}
