//! # ethkit-merkle
//!
//! Keccak-family digests and a binary Merkle tree for ethkit.
//!
//! - [`hash::HashValue`]: a 32-byte digest, presented as `0x`-prefixed lowercase hex
//! - [`hash::HashProvider`]: the single capability the tree needs, `hash(bytes) -> digest`
//! - [`binary::BinaryMerkleTree`]: an ordered-data Merkle tree that keeps every level
//!
//! ## Node hashing
//!
//! Leaves are `hash(item)`. An internal node is the hash of the *textual* hex form of
//! its two children concatenated, `hash("0x<left>" ++ "0x<right>")`, and an unpaired
//! last node on a level is paired with itself. Roots computed this way match those of
//! existing ethkit deployments, which is why raw-byte concatenation is not offered.
//!
//! Leaves and internal nodes share one hash domain. A leaf whose payload is exactly
//! the 132-byte hex text of two digests hashes to the same value as the internal node
//! over those digests, so a root does not by itself prove the depth of a leaf.

pub mod binary;
pub mod error;
pub mod hash;

pub use binary::{BinaryMerkleProof, BinaryMerkleTree};
pub use error::{MerkleError, MerkleResult};
pub use hash::{keccak256, sha3_256, HashAlgorithm, HashProvider, HashValue};

/// The length of hash digests used in merkle trees (32 bytes = 256 bits)
pub const HASH_LENGTH: usize = 32;
