//! Decomposition of big integers into fixed-width little-endian words.

mod encoding;

pub use encoding::ConstItem;
#[cfg(feature = "std")]
pub use encoding::print_words;

use crate::{Error, Result};
use alloc::vec::Vec;
use core::slice;
use num_bigint::BigUint;
use num_traits::Zero;

/// Number of bits in each word of a [`WordArray`].
///
/// Always a multiple of 4 so every word prints as a whole number of hex
/// digits, and at most 64 since words are stored as `u64`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct WordWidth(u32);

impl WordWidth {
    /// Largest supported width.
    pub const MAX_BITS: u32 = u64::BITS;

    /// 8-bit words.
    pub const U8: Self = Self(8);

    /// 16-bit words.
    pub const U16: Self = Self(16);

    /// 32-bit words.
    pub const U32: Self = Self(32);

    /// 64-bit words.
    pub const U64: Self = Self(64);

    /// Create a new word width, checking that `bits` is a multiple of 4 in
    /// `4..=64`.
    pub const fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits % 4 != 0 || bits > Self::MAX_BITS {
            return Err(Error::InvalidWordWidth(bits));
        }

        Ok(Self(bits))
    }

    /// Bits per word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Hexadecimal digits needed to print a word of this width.
    pub const fn hex_digits(self) -> usize {
        (self.0 / 4) as usize
    }

    /// Mask selecting the low `bits` bits of a `u64`.
    pub const fn mask(self) -> u64 {
        u64::MAX >> (Self::MAX_BITS - self.0)
    }

    /// Total bits available in `count` words of this width.
    pub const fn capacity(self, count: usize) -> u64 {
        (count as u64).saturating_mul(self.0 as u64)
    }
}

impl TryFrom<u32> for WordWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

/// Little-endian sequence of `c`-bit words: index 0 holds the least
/// significant word.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct WordArray {
    words: Vec<u64>,
    width: WordWidth,
}

impl WordArray {
    /// Borrow the words, least significant first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Width of each word.
    pub fn width(&self) -> WordWidth {
        self.width
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is this array empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words, least significant first.
    pub fn iter(&self) -> slice::Iter<'_, u64> {
        self.words.iter()
    }

    /// Recompose the integer as `Σ word[i] · (2^c)^i`.
    pub fn to_biguint(&self) -> BigUint {
        self.words.iter().rev().fold(BigUint::zero(), |acc, &word| {
            (acc << self.width.bits()) | BigUint::from(word)
        })
    }

    /// Consume the array and return its words.
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }
}

impl AsRef<[u64]> for WordArray {
    fn as_ref(&self) -> &[u64] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordArray {
    type Item = &'a u64;
    type IntoIter = slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for WordArray {
    type Item = u64;
    type IntoIter = alloc::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Does `a` fit in `count` words of `width` bits, i.e. is `(2^c)^b > a`?
pub fn fits(a: &BigUint, count: usize, width: WordWidth) -> bool {
    a.bits() <= width.capacity(count)
}

/// Decompose `a` into `count` little-endian words of `width` bits each.
///
/// Word `i` is `(a / (2^c)^i) mod 2^c`. High words beyond the bit length of
/// `a` are zero.
///
/// # Errors
/// - [`Error::InvalidWordCount`] if `count` is zero.
/// - [`Error::PreconditionViolation`] if `a >= (2^c)^count`. The check runs
///   before any word is extracted.
pub fn decompose(a: &BigUint, count: usize, width: WordWidth) -> Result<WordArray> {
    if count == 0 {
        return Err(Error::InvalidWordCount);
    }

    let bits = a.bits();
    let capacity = width.capacity(count);
    if bits > capacity {
        return Err(Error::PreconditionViolation { bits, capacity });
    }

    let mask = BigUint::from(width.mask());
    let mut rest = a.clone();
    let mut words = Vec::with_capacity(count);

    for _ in 0..count {
        // The masked value is below 2^64 so it has at most one u64 digit.
        let word = &rest & &mask;
        words.push(word.iter_u64_digits().next().unwrap_or(0));
        rest >>= width.bits();
    }

    debug_assert!(rest.is_zero());
    tracing::debug!(bits, count, width = width.bits(), "decomposed value into words");

    Ok(WordArray { words, width })
}
