//! Key error types

use ethkit_merkle::MerkleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Random source failure: {0}")]
    RandomSource(String),

    #[error("Digest too short for an address: expected at least {expected} bytes, got {got}")]
    DigestTooShort { expected: usize, got: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Hash error: {0}")]
    Hash(#[from] MerkleError),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

pub type KeyResult<T> = std::result::Result<T, KeyError>;
