//! Rendering of word arrays as Rust source text.

use super::{WordArray, WordWidth};
use core::fmt;

#[cfg(feature = "std")]
use {super::decompose, crate::Result, num_bigint::BigUint, std::io};

impl WordWidth {
    /// Smallest unsigned Rust integer type holding a word of this width.
    pub const fn rust_type(self) -> &'static str {
        match self.0 {
            0..=8 => "u8",
            9..=16 => "u16",
            17..=32 => "u32",
            _ => "u64",
        }
    }
}

impl WordArray {
    /// Wrap this array so that it is formatted as a named Rust constant item,
    /// e.g. `pub const MODULUS: [u32; 8] = [ ... ];`.
    pub fn as_const_item<'a>(&'a self, name: &'a str) -> ConstItem<'a> {
        ConstItem { name, words: self }
    }

    /// Write one `    0x…,` line per word, zero-padded to `c/4` digits.
    fn fmt_words(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width.hex_digits();
        for word in &self.words {
            writeln!(f, "    0x{word:0digits$x},")?;
        }
        Ok(())
    }

    /// Write the array literal followed by a newline.
    #[cfg(feature = "std")]
    pub fn write_to<W: io::Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

/// Formats as an array literal: `[`, one word per line, `];`.
impl fmt::Display for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[\n")?;
        self.fmt_words(f)?;
        f.write_str("];")
    }
}

/// A [`WordArray`] which is formatted as a Rust `pub const` item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstItem<'a> {
    name: &'a str,
    words: &'a WordArray,
}

impl fmt::Display for ConstItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "pub const {}: [{}; {}] = [",
            self.name,
            self.words.width.rust_type(),
            self.words.len()
        )?;
        self.words.fmt_words(f)?;
        f.write_str("];")
    }
}

/// Decompose `a` into `count` words of `width` bits and print the array
/// literal to standard output.
///
/// Nothing is printed if the value does not fit.
#[cfg(feature = "std")]
pub fn print_words(a: &BigUint, count: usize, width: WordWidth) -> Result<()> {
    let words = decompose(a, count, width)?;
    words.write_to(io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use crate::words::{WordWidth, decompose};
    use alloc::{format, string::ToString};
    use num_bigint::BigUint;

    #[test]
    fn display_pads_every_word() {
        let words = decompose(&BigUint::from(0x0a_00_ffu32), 4, WordWidth::U8).unwrap();
        assert_eq!(
            words.to_string(),
            "[\n    0xff,\n    0x00,\n    0x0a,\n    0x00,\n];"
        );
    }

    #[test]
    fn display_zero_is_not_shortened() {
        let words = decompose(&BigUint::from(0u8), 1, WordWidth::U64).unwrap();
        assert_eq!(words.to_string(), "[\n    0x0000000000000000,\n];");
    }

    #[test]
    fn display_nibbles() {
        let words = decompose(&BigUint::from(0x1fu8), 2, WordWidth::new(4).unwrap()).unwrap();
        assert_eq!(words.to_string(), "[\n    0xf,\n    0x1,\n];");
    }

    #[test]
    fn display_is_lowercase() {
        let words = decompose(&BigUint::from(0xdead_beefu32), 1, WordWidth::U32).unwrap();
        assert_eq!(format!("{words}"), "[\n    0xdeadbeef,\n];");
    }

    #[test]
    fn rust_type() {
        assert_eq!(WordWidth::new(4).unwrap().rust_type(), "u8");
        assert_eq!(WordWidth::U8.rust_type(), "u8");
        assert_eq!(WordWidth::new(12).unwrap().rust_type(), "u16");
        assert_eq!(WordWidth::new(20).unwrap().rust_type(), "u32");
        assert_eq!(WordWidth::new(48).unwrap().rust_type(), "u64");
    }

    #[test]
    fn const_item() {
        let words = decompose(&BigUint::from(0x1_0000_0001u64), 2, WordWidth::U32).unwrap();
        assert_eq!(
            words.as_const_item("MODULUS").to_string(),
            "pub const MODULUS: [u32; 2] = [\n    0x00000001,\n    0x00000001,\n];"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_to_appends_newline() {
        let words = decompose(&BigUint::from(0x20u8), 2, WordWidth::U8).unwrap();
        let mut out = alloc::vec::Vec::new();
        words.write_to(&mut out).unwrap();
        assert_eq!(out, b"[\n    0x20,\n    0x00,\n];\n");
    }
}
