//! Address command handler

use super::input_bytes;
use anyhow::Result;
use colored::Colorize;
use ethkit_keys::{derive_address, Address};
use ethkit_merkle::HashAlgorithm;
use tracing::info;

pub fn handle(public_key: &str, hex: bool, algorithm: HashAlgorithm) -> Result<()> {
    let address = compute(public_key, hex, algorithm)?;
    info!(%algorithm, %address, "derived address");

    println!("  Public Key: {}", public_key.cyan());
    println!("  Address:    {}", address.to_string().green());
    Ok(())
}

pub fn compute(public_key: &str, hex: bool, algorithm: HashAlgorithm) -> Result<Address> {
    let bytes = input_bytes(public_key, hex)?;
    Ok(derive_address(&algorithm, &bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_forty_hex_digits() {
        let address = compute("0x04abcdef", true, HashAlgorithm::Keccak256).unwrap();
        let text = address.to_string();

        assert_eq!(text.len(), 42);
        assert!(text.starts_with("0x"));
    }

    #[test]
    fn test_text_and_hex_inputs_differ() {
        let text = compute("0x04", false, HashAlgorithm::Sha3_256).unwrap();
        let bytes = compute("0x04", true, HashAlgorithm::Sha3_256).unwrap();
        assert_ne!(text, bytes);
    }
}
