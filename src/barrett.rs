//! Barrett reduction constants.
//!
//! Barrett reduction replaces division by a modulus `m` with multiplication
//! by the precomputed constant `μ = ⌊bᵏ / m⌋` plus a bounded correction.
//!
//! Which `b` and `k` are correct depends on the Barrett variant implemented
//! by the arithmetic engine consuming `μ`: commonly `b` is its word base and
//! `k` is twice the number of words of `m`. Nothing here checks that
//! relationship; keeping the parameters consistent with the engine is the
//! caller's responsibility.

use crate::{Error, Result, WordArray, WordWidth, words::decompose};
use core::{
    num::{NonZeroU32, NonZeroU64, NonZeroU128},
    ops::Deref,
    str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One, Zero};

/// Strictly positive modulus.
///
/// Primality is not checked.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Modulus(BigUint);

impl Modulus {
    /// Create a new modulus, rejecting zero with [`Error::DivisionByZero`].
    pub fn new(n: BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self(n))
    }

    /// Borrow the inner value.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> BigUint {
        self.0
    }
}

impl AsRef<BigUint> for Modulus {
    fn as_ref(&self) -> &BigUint {
        &self.0
    }
}

impl Deref for Modulus {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.0
    }
}

impl TryFrom<BigUint> for Modulus {
    type Error = Error;

    fn try_from(n: BigUint) -> Result<Self> {
        Self::new(n)
    }
}

impl TryFrom<BigInt> for Modulus {
    type Error = Error;

    fn try_from(n: BigInt) -> Result<Self> {
        match n.into_parts() {
            (Sign::Minus, _) => Err(Error::InvalidModulus),
            (_, magnitude) => Self::new(magnitude),
        }
    }
}

impl From<NonZeroU32> for Modulus {
    fn from(n: NonZeroU32) -> Self {
        Self(BigUint::from(n.get()))
    }
}

impl From<NonZeroU64> for Modulus {
    fn from(n: NonZeroU64) -> Self {
        Self(BigUint::from(n.get()))
    }
}

impl From<NonZeroU128> for Modulus {
    fn from(n: NonZeroU128) -> Self {
        Self(BigUint::from(n.get()))
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
///
/// Underscores between digits are accepted. A leading `-` on a nonzero value
/// yields [`Error::InvalidModulus`].
impl FromStr for Modulus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (16, hex),
            None => (10, s),
        };

        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(Error::Parse);
        }

        let n = BigUint::from_str_radix(digits, radix).map_err(|_| Error::Parse)?;

        if negative && !n.is_zero() {
            return Err(Error::InvalidModulus);
        }

        Self::new(n)
    }
}

/// Compute the Barrett constant `μ = ⌊word_size^nr_words / modulus⌋`.
///
/// # Errors
/// [`Error::DivisionByZero`] if `modulus` is zero. Negative moduli can't be
/// expressed as [`BigUint`]; use [`Modulus::try_from`] on a [`BigInt`] to
/// reject them.
pub fn barrett_mu(word_size: &BigUint, nr_words: u32, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }

    Ok(mu(word_size, nr_words, modulus))
}

fn mu(word_size: &BigUint, nr_words: u32, modulus: &BigUint) -> BigUint {
    let mu = word_size.pow(nr_words) / modulus;
    tracing::debug!(
        nr_words,
        modulus_bits = modulus.bits(),
        mu_bits = mu.bits(),
        "derived Barrett constant"
    );
    mu
}

/// Parameters of a Barrett constant: base, exponent and modulus.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BarrettParams {
    word_size: BigUint,
    nr_words: u32,
    modulus: Modulus,
}

impl BarrettParams {
    /// Create parameters for `μ = ⌊word_size^nr_words / modulus⌋`.
    pub fn new(word_size: BigUint, nr_words: u32, modulus: Modulus) -> Self {
        Self {
            word_size,
            nr_words,
            modulus,
        }
    }

    /// Create parameters with base `2^bits`.
    pub fn for_word_bits(bits: u32, nr_words: u32, modulus: Modulus) -> Self {
        Self::new(BigUint::one() << bits, nr_words, modulus)
    }

    /// Base of the exponentiation.
    pub fn word_size(&self) -> &BigUint {
        &self.word_size
    }

    /// Exponent.
    pub fn nr_words(&self) -> u32 {
        self.nr_words
    }

    /// Modulus.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// `word_size^nr_words`.
    pub fn radix_power(&self) -> BigUint {
        self.word_size.pow(self.nr_words)
    }

    /// Compute `μ`.
    pub fn mu(&self) -> BigUint {
        mu(&self.word_size, self.nr_words, &self.modulus)
    }

    /// Compute `μ` and decompose it into `count` words of `width` bits.
    pub fn to_words(&self, count: usize, width: WordWidth) -> Result<WordArray> {
        decompose(&self.mu(), count, width)
    }

    /// Is `mu` the floor quotient, i.e. `μ·m ≤ bᵏ < (μ+1)·m`?
    pub fn check(&self, mu: &BigUint) -> bool {
        let radix_power = self.radix_power();
        let lower = mu * self.modulus.as_biguint();
        lower <= radix_power && radix_power < lower + self.modulus.as_biguint()
    }
}
