//! Error type.

use core::fmt;

/// Result type with the `field-precompute` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
///
/// Every variant describes invalid caller input: none of them is transient,
/// so there is nothing to retry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The value does not fit in the requested number of words, i.e.
    /// `(2^c)^b <= a`.
    PreconditionViolation {
        /// Bit length of the value being decomposed.
        bits: u64,

        /// Number of bits available: word count times word width.
        capacity: u64,
    },

    /// The word width is not a multiple of 4 between 4 and 64 bits.
    InvalidWordWidth(u32),

    /// The word count is zero.
    InvalidWordCount,

    /// The modulus is zero.
    DivisionByZero,

    /// The modulus is negative.
    InvalidModulus,

    /// The input string is not a decimal or `0x`-prefixed hexadecimal number.
    Parse,

    /// Writing the rendered output failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation { bits, capacity } => write!(
                f,
                "value of {bits} bits does not fit in {capacity} bits of words"
            ),
            Self::InvalidWordWidth(bits) => write!(
                f,
                "invalid word width of {bits} bits (expected a multiple of 4 in 4..=64)"
            ),
            Self::InvalidWordCount => write!(f, "word count must be at least 1"),
            Self::DivisionByZero => write!(f, "modulus is zero"),
            Self::InvalidModulus => write!(f, "modulus is negative"),
            Self::Parse => write!(f, "invalid integer literal"),
            #[cfg(feature = "std")]
            Self::Io(kind) => write!(f, "I/O error: {kind}"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err.kind())
    }
}
