//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::One;

/// The Curve25519 base field prime `2^255 - 19`.
pub fn p25519() -> BigUint {
    (BigUint::one() << 255u32) - 19u32
}

/// Recompose words as `Σ word[i] · (2^c)^i`, using `pow` rather than shifts
/// so that it is independent of the implementation under test.
pub fn recompose(words: &[u64], bits: u32) -> BigUint {
    let base = BigUint::from(2u8).pow(bits);
    words
        .iter()
        .enumerate()
        .map(|(i, &word)| BigUint::from(word) * base.pow(i as u32))
        .sum()
}

/// Narrow 8-bit words to bytes.
pub fn to_bytes(words: &[u64]) -> Vec<u8> {
    words
        .iter()
        .map(|&word| u8::try_from(word).expect("word wider than 8 bits"))
        .collect()
}
