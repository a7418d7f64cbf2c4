//! Equivalence tests between `field_precompute::decompose` and
//! `num_bigint::BigUint` arithmetic.

mod common;

use common::recompose;
use field_precompute::{Error, WordWidth, decompose, fits};
use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

prop_compose! {
    fn biguint()(bytes in proptest::collection::vec(any::<u8>(), 0..64)) -> BigUint {
        BigUint::from_bytes_le(&bytes)
    }
}

prop_compose! {
    fn width()(bits in prop_oneof![Just(4u32), Just(8), Just(32), Just(64)]) -> WordWidth {
        WordWidth::new(bits).unwrap()
    }
}

/// `2^(count·bits)`, the smallest value that no longer fits.
fn limit(count: usize, width: WordWidth) -> BigUint {
    BigUint::one() << (count as u64 * u64::from(width.bits()))
}

proptest! {
    #[test]
    fn roundtrip(a in biguint(), count in 1..24usize, width in width()) {
        let a = a % limit(count, width);
        let words = decompose(&a, count, width).unwrap();

        prop_assert_eq!(words.len(), count);
        prop_assert!(words.iter().all(|&w| w <= width.mask()));
        prop_assert_eq!(recompose(words.words(), width.bits()), a.clone());
        prop_assert_eq!(words.to_biguint(), a);
    }

    #[test]
    fn rejects_values_too_large(a in biguint(), count in 1..24usize, width in width()) {
        let a = limit(count, width) + a;

        prop_assert!(!fits(&a, count, width));
        prop_assert_eq!(
            decompose(&a, count, width),
            Err(Error::PreconditionViolation {
                bits: a.bits(),
                capacity: count as u64 * u64::from(width.bits()),
            })
        );
    }

    #[test]
    fn digits_are_padded(a in biguint(), count in 1..24usize, width in width()) {
        let a = a % limit(count, width);
        let rendered = decompose(&a, count, width).unwrap().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        prop_assert_eq!(lines.len(), count + 2);
        prop_assert_eq!(lines[0], "[");
        prop_assert_eq!(lines[count + 1], "];");

        for line in &lines[1..=count] {
            let digits = line
                .strip_prefix("    0x")
                .and_then(|l| l.strip_suffix(','))
                .unwrap();
            prop_assert_eq!(digits.len(), width.hex_digits());
            prop_assert!(digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }
    }

    #[test]
    fn fits_matches_bit_length(a in biguint(), count in 1..24usize, width in width()) {
        prop_assert_eq!(fits(&a, count, width), a < limit(count, width));
    }
}
