use crate::*;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// The election's Paillier public key `(n, g)`.
///
/// Fetched once per session from the election authority and shared
/// read-only by every encryption call. `n` is expected to be at least
/// 2048 bits for a real election; nothing below enforces a minimum so
/// that tests can run with tiny keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    #[serde(with = "crate::serde_decimal")]
    pub n: BigUint,

    #[serde(with = "crate::serde_decimal")]
    pub g: BigUint,
}

impl PublicKey {
    pub fn new(n: BigUint, g: BigUint) -> Result<Self, Error> {
        if n <= BigUint::one() {
            return Err(Error::MalformedKey);
        }
        Ok(PublicKey { n, g })
    }

    /// Decode a key from the decimal-string wire form served by the
    /// election API (`{"n": "...", "g": "..."}` carries these fields).
    pub fn from_decimal(n: &str, g: &str) -> Result<Self, Error> {
        let n: BigUint = n.parse()?;
        let g: BigUint = g.parse()?;
        PublicKey::new(n, g)
    }

    /// `n²`, the ciphertext modulus.
    pub fn n_squared(&self) -> BigUint {
        &self.n * &self.n
    }
}

/// A single encrypted plaintext in `[0, n²)`, opaque to everyone except
/// the holder of the private key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(#[serde(with = "crate::serde_decimal")] pub BigUint);

impl Ciphertext {
    /// Decimal-string wire encoding expected by the voting server.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

/// Encrypt `value` under `key` with the Paillier transform:
///
/// ```text
/// c = g^value * r^n  mod n²
/// ```
///
/// where `r` is a fresh 2048-bit blinding factor drawn for this call
/// alone. Repeated calls with identical inputs therefore produce
/// different ciphertexts, and the product of two ciphertexts decrypts
/// to the sum of their plaintexts mod `n`.
pub fn encrypt(value: &BigUint, key: &PublicKey) -> Result<Ciphertext, Error> {
    if *value >= key.n {
        return Err(Error::InvalidPlaintext);
    }

    let n2 = key.n_squared();

    // Redraw until the blinding factor is invertible mod n. For a
    // 2048-bit n this loop runs once; for tiny test keys it keeps every
    // ciphertext decryptable.
    let r = loop {
        let r = random_blinding_factor()?;
        if r.gcd(&key.n).is_one() {
            break r;
        }
    };

    let c = pow_mod(&key.g, value, &n2)? * pow_mod(&r, &key.n, &n2)? % &n2;
    Ok(Ciphertext(c))
}
