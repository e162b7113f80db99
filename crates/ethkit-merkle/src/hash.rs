//! Hash utilities and types for merkle trees.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha3::digest::Output;
use sha3::{Digest, Keccak256, Sha3_256};
use std::fmt;
use std::str::FromStr;

use crate::{MerkleError, MerkleResult, HASH_LENGTH};

/// A 256-bit digest used for leaves, internal nodes and roots.
///
/// Always presented as lowercase hex with a literal `0x` prefix. That text form is
/// also what internal nodes hash over, see [`hash_node`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashValue([u8; HASH_LENGTH]);

impl HashValue {
    /// Create a HashValue from a slice
    pub fn from_slice(bytes: &[u8]) -> MerkleResult<Self> {
        if bytes.len() != HASH_LENGTH {
            return Err(MerkleError::InvalidHashLength {
                expected: HASH_LENGTH,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; HASH_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Create a HashValue from hex string, with or without the `0x` prefix
    pub fn from_hex(hex_str: &str) -> MerkleResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)
            .map_err(|e| MerkleError::InvalidInput(format!("Invalid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex, identical to the `Display` output
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({})", self)
    }
}

impl FromStr for HashValue {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for HashValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HashValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// The one capability the tree builder and the address deriver consume.
///
/// Implementations must be deterministic and return a 32-byte digest for any input,
/// including empty input. A provider whose underlying digest has a different size
/// reports [`MerkleError::InvalidHashLength`] instead of truncating.
pub trait HashProvider: Send + Sync {
    /// Short name used in logs and CLI output
    fn name(&self) -> &'static str;

    fn hash(&self, data: &[u8]) -> MerkleResult<HashValue>;
}

/// Built-in hash algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// FIPS-202 SHA3-256, the digest ethkit roots have always been computed with
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// Pre-standard Keccak-256 (Ethereum padding)
    #[serde(rename = "keccak256")]
    Keccak256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha3_256, HashAlgorithm::Keccak256];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Keccak256 => "keccak256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "keccak256" | "keccak-256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            other => Err(MerkleError::InvalidInput(format!(
                "Unknown hash algorithm '{}', expected one of: sha3-256, keccak256",
                other
            ))),
        }
    }
}

impl HashProvider for HashAlgorithm {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn hash(&self, data: &[u8]) -> MerkleResult<HashValue> {
        match self {
            HashAlgorithm::Sha3_256 => Ok(sha3_256(data)),
            HashAlgorithm::Keccak256 => Ok(keccak256(data)),
        }
    }
}

fn digest_with<D>(data: &[u8]) -> HashValue
where
    D: Digest,
    Output<D>: Into<[u8; HASH_LENGTH]>,
{
    HashValue(D::digest(data).into())
}

/// Hash data using SHA3-256
pub fn sha3_256(data: &[u8]) -> HashValue {
    digest_with::<Sha3_256>(data)
}

/// Hash data using Keccak-256 (Ethereum)
pub fn keccak256(data: &[u8]) -> HashValue {
    digest_with::<Keccak256>(data)
}

/// Hash leaf data. No domain prefix is applied.
pub fn hash_leaf<P: HashProvider + ?Sized>(provider: &P, data: &[u8]) -> MerkleResult<HashValue> {
    provider.hash(data)
}

/// Hash two child hashes to create the parent hash.
///
/// The input is the concatenated `0x`-prefixed hex text of both children (132 ASCII
/// bytes), not their raw bytes.
pub fn hash_node<P: HashProvider + ?Sized>(
    provider: &P,
    left: &HashValue,
    right: &HashValue,
) -> MerkleResult<HashValue> {
    let combined = format!("{}{}", left, right);
    provider.hash(combined.as_bytes())
}
