//! Merkle error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    #[error("Cannot build a merkle tree from an empty item list")]
    EmptyInput,

    #[error("Invalid hash length: expected {expected}, got {got}")]
    InvalidHashLength { expected: usize, got: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Hash provider failure: {0}")]
    HashProvider(String),

    #[error("Leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Proof verification failed")]
    ProofVerificationFailed,
}

pub type MerkleResult<T> = std::result::Result<T, MerkleError>;
