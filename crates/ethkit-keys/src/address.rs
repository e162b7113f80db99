//! Account addresses derived from public keys.

use ethkit_merkle::HashProvider;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{KeyError, KeyResult};

/// Length of an account address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account address, shown as `0x` followed by 40 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Take the trailing 20 bytes of a digest.
    ///
    /// Fails if the digest is shorter than an address, which can only happen with a
    /// non-standard hash provider.
    pub fn from_digest(digest: &[u8]) -> KeyResult<Self> {
        if digest.len() < ADDRESS_LENGTH {
            return Err(KeyError::DigestTooShort {
                expected: ADDRESS_LENGTH,
                got: digest.len(),
            });
        }
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LENGTH..]);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Derive the account address of `public_key`: the last 20 bytes of its hash.
///
/// The key bytes are hashed as given; no key format is parsed or validated.
pub fn derive_address<P: HashProvider + ?Sized>(
    provider: &P,
    public_key: &[u8],
) -> KeyResult<Address> {
    let digest = provider.hash(public_key)?;
    Address::from_digest(digest.as_bytes())
}
