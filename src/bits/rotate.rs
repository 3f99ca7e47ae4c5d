//! Bit rotation within an arbitrary-width field.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns the all-ones mask `2^max_bits - 1`.
pub fn mask(max_bits: usize) -> BigUint {
    (BigUint::one() << max_bits) - BigUint::one()
}

/// Rotates `val` left by `r_bits` within a field of `max_bits` bits.
///
/// `r_bits` wraps modulo `max_bits` and the result is masked to the field
/// width. A zero-width field always yields zero.
pub fn rol(val: &BigUint, r_bits: usize, max_bits: usize) -> BigUint {
    if max_bits == 0 {
        return BigUint::zero();
    }
    let m = mask(max_bits);
    let r = r_bits % max_bits;
    let field = val & &m;

    ((&field << r) & &m) | (field >> (max_bits - r))
}

/// Rotates `val` right by `r_bits` within a field of `max_bits` bits.
///
/// `r_bits` wraps modulo `max_bits` and the result is masked to the field
/// width. A zero-width field always yields zero.
pub fn ror(val: &BigUint, r_bits: usize, max_bits: usize) -> BigUint {
    if max_bits == 0 {
        return BigUint::zero();
    }
    let m = mask(max_bits);
    let r = r_bits % max_bits;
    let field = val & &m;

    (&field >> r) | ((field << (max_bits - r)) & &m)
}

/// Renders `val` as `0b` followed by its binary digits.
///
/// No leading zeros and no separators; zero renders as `0b0`. Pool hashes
/// are taken over this text, so the format must not change.
#[inline]
pub fn to_binary_text(val: &BigUint) -> String {
    format!("0b{:b}", val)
}
