//! Private key generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeyError, KeyResult};

/// Length of a private key in bytes (256 bits)
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// A 256-bit private key. The bytes are wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    /// Generate a key from the operating system CSPRNG.
    pub fn generate() -> KeyResult<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a key from a caller-supplied cryptographic RNG.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> KeyResult<Self> {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| KeyError::RandomSource(e.to_string()))?;
        debug!("generated private key");
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }

    /// `0x` followed by 64 lowercase hex digits
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generated_keys_are_distinct() {
        let keys: HashSet<String> = (0..1000)
            .map(|_| PrivateKey::generate().unwrap().to_hex())
            .collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_hex_format() {
        let key = PrivateKey::generate().unwrap();
        let text = key.to_hex();

        assert!(text.starts_with("0x"));
        assert_eq!(text.len(), 2 + PRIVATE_KEY_LENGTH * 2);
        assert!(text[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = PrivateKey::generate_with(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = PrivateKey::generate_with(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = PrivateKey::generate_with(&mut StdRng::seed_from_u64(1)).unwrap();
        let shown = format!("{:?}", key);

        assert_eq!(shown, "PrivateKey(<redacted>)");
        assert!(!shown.contains(&hex::encode(key.as_bytes())));
    }

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy source unavailable",
            )))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn test_random_source_failure_surfaces() {
        let err = PrivateKey::generate_with(&mut FailingRng).unwrap_err();
        assert!(matches!(err, KeyError::RandomSource(msg) if msg.contains("entropy")));
    }
}
