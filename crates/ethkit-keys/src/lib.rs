//! # ethkit-keys
//!
//! Account helpers layered on the ethkit hash providers:
//!
//! - [`address::Address`]: the last 20 bytes of `hash(public_key)`
//! - [`private_key::PrivateKey`]: 32 bytes drawn from the OS CSPRNG
//! - [`signature::verify_signature`]: not implemented, always refuses

pub mod address;
pub mod error;
pub mod private_key;
pub mod signature;

pub use address::{derive_address, Address, ADDRESS_LENGTH};
pub use error::{KeyError, KeyResult};
pub use private_key::{PrivateKey, PRIVATE_KEY_LENGTH};
pub use signature::verify_signature;

/// Decode a hex argument, accepting an optional `0x` prefix.
pub fn decode_hex(input: &str) -> KeyResult<Vec<u8>> {
    let trimmed = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(trimmed).map_err(|e| KeyError::InvalidHex(format!("{}: {}", input, e)))
}
