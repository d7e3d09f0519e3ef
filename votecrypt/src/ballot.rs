use crate::*;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// An encrypted one-hot ballot: one ciphertext per candidate, in
/// candidate order. Position `i` encrypts `1` iff the voter chose
/// candidate `i`, else `0`. Only the keyholder can tell which.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ballot {
    pub choices: Vec<Ciphertext>,
}

impl Ballot {
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The ordered decimal-string wire form submitted to the voting
    /// server alongside the voter's authorization token.
    pub fn to_decimal(&self) -> Vec<String> {
        self.choices.iter().map(Ciphertext::to_decimal).collect()
    }
}

/// Encrypt a one-hot ballot for the chosen candidate.
///
/// Every entry is encrypted independently with its own fresh blinding
/// factor; no ciphertext is derived from another, so entries are not
/// linkable. Preconditions are checked before any encryption happens,
/// so a failed call never yields a partial ballot.
pub fn build_ballot(
    candidate_index: usize,
    candidate_count: usize,
    key: &PublicKey,
) -> Result<Ballot, Error> {
    if candidate_count == 0 {
        return Err(Error::InvalidCandidateCount);
    }
    if candidate_index >= candidate_count {
        return Err(Error::InvalidCandidateIndex {
            index: candidate_index,
            count: candidate_count,
        });
    }

    let mut choices = Vec::with_capacity(candidate_count);
    for i in 0..candidate_count {
        let value = if i == candidate_index {
            BigUint::one()
        } else {
            BigUint::zero()
        };
        choices.push(encrypt(&value, key)?);
    }

    Ok(Ballot { choices })
}
