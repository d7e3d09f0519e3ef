use crate::Error;
use num_bigint::BigUint;
use rand_core::{OsRng, RngCore};

/// Bit width of the blinding factor drawn for each encryption.
pub const BLINDING_FACTOR_BITS: usize = 2048;

/// Draw a fresh blinding factor, uniform over the 2048-bit space, from
/// the operating system CSPRNG.
///
/// Every call is an independent draw. The value is returned as drawn,
/// without reduction modulo `n`. If the OS randomness facility fails the
/// error is surfaced to the caller and the encryption in progress is
/// abandoned; there is no fallback generator.
pub fn random_blinding_factor() -> Result<BigUint, Error> {
    let mut bytes = [0u8; BLINDING_FACTOR_BITS / 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(BigUint::from_bytes_be(&bytes))
}
