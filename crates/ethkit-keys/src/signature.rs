//! Signature verification.
//!
//! No elliptic-curve backend is wired in, so verification is refused outright rather
//! than reporting a signature as valid without checking it.

use ethkit_merkle::HashProvider;
use tracing::{debug, warn};

use crate::error::{KeyError, KeyResult};

/// Verify `signature` over `message` for `public_key`.
///
/// Always returns [`KeyError::Unsupported`]. Callers must treat that as "not verified".
pub fn verify_signature<P: HashProvider + ?Sized>(
    provider: &P,
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> KeyResult<()> {
    let message_hash = provider.hash(message)?;
    debug!(
        message_hash = %message_hash,
        signature_len = signature.len(),
        public_key_len = public_key.len(),
        "signature verification requested"
    );
    warn!("secp256k1 signature verification is not available; refusing");
    Err(KeyError::Unsupported(
        "secp256k1 signature verification".to_string(),
    ))
}
