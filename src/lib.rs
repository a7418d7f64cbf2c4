//! Offline generator for the constants of prime-field arithmetic engines.
//!
//! # About
//! Field arithmetic engines for elliptic-curve cryptography store their
//! modulus and reduction constants as fixed-width word arrays. This crate
//! computes those arrays ahead of time, as a build-time tool: it does no
//! field arithmetic of its own.
//!
//! It provides two pieces:
//! - [`decompose`]: split a big integer into `b` little-endian words of `c`
//!   bits each, failing if the value does not fit.
//! - [`barrett_mu`]: derive the Barrett reduction constant
//!   `μ = ⌊word_size^nr_words / m⌋`.
//!
//! Decomposed [`WordArray`]s render as Rust array literals through their
//! [`Display`](core::fmt::Display) impl, ready to paste into a source file.
//!
//! # Usage
//! ```
//! use field_precompute::{WordWidth, barrett_mu, decompose};
//! use num_bigint::BigUint;
//!
//! let p = (BigUint::from(1u8) << 255u32) - 19u32;
//! let mu = barrett_mu(&BigUint::from(256u32), 32, &p)?;
//! let words = decompose(&mu, 32, WordWidth::U8)?;
//!
//! assert_eq!(words.words()[0], 0x02);
//! assert!(words.to_string().starts_with("[\n    0x02,\n    0x00,\n"));
//! # Ok::<(), field_precompute::Error>(())
//! ```
//!
//! # Caller obligations
//! The word count and base used for `μ` must match the Barrett variant of
//! the engine that consumes it. See the [`barrett`] module.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod barrett;
mod error;
mod words;

pub use crate::{
    barrett::{BarrettParams, Modulus, barrett_mu},
    error::{Error, Result},
    words::{ConstItem, WordArray, WordWidth, decompose, fits},
};
pub use num_bigint;

#[cfg(feature = "std")]
pub use crate::words::print_words;
