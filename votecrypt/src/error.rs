use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("votecrypt: secure randomness unavailable: {0}")]
    RandomnessUnavailable(#[from] rand_core::Error),

    #[error("votecrypt: plaintext out of range, must be in [0, n)")]
    InvalidPlaintext,

    #[error("votecrypt: modulus must be greater than 1")]
    InvalidModulus,

    #[error("votecrypt: malformed public key, n must be greater than 1")]
    MalformedKey,

    #[error("votecrypt: candidate index {index} out of range for {count} candidates")]
    InvalidCandidateIndex { index: usize, count: usize },

    #[error("votecrypt: candidate count must be at least 1")]
    InvalidCandidateCount,

    #[error("votecrypt: invalid decimal integer: {0}")]
    BadDecimal(#[from] num_bigint::ParseBigIntError),
}
