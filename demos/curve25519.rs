//! Prints the precomputed constants for the Curve25519 base field,
//! p = 2^255 - 19.
//!
//! Set `RUST_LOG=debug` to trace each derivation.

use field_precompute::{BarrettParams, Modulus, Result, WordWidth, decompose, print_words};
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let p = Modulus::try_from((BigUint::from(1u8) << 255u32) - 19u32)?;

    print_words(&BigUint::from(32u8), 32, WordWidth::U64)?;

    // (p - 1) / 2
    print_words(&((&*p - 1u32) / 2u32), 32, WordWidth::U8)?;

    print_words(&p, 32, WordWidth::U32)?;

    let barrett = BarrettParams::for_word_bits(8, 32, p.clone());
    let mu = barrett.mu();
    println!("{mu}");
    print_words(&mu, 32, WordWidth::U8)?;

    let limbs = decompose(&p, 4, WordWidth::U64)?;
    println!("{}", limbs.as_const_item("MODULUS"));

    Ok(())
}
