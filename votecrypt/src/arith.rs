use crate::Error;
use num_bigint::BigUint;
use num_traits::One;

/// Compute `base^exponent mod modulus` by binary square-and-multiply.
///
/// The exponent is walked one bit at a time, low to high, squaring at
/// every step, so the number of squarings depends only on the exponent's
/// bit length. Operands of several thousand bits are expected: the
/// modulus is `n²` for a 2048-bit `n`.
pub fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint, Error> {
    if *modulus <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    let mut result = BigUint::one();
    let mut square = base % modulus;

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = &result * &square % modulus;
        }
        square = &square * &square % modulus;
    }

    Ok(result)
}
