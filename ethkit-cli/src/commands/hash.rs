//! Hash command handler

use super::input_bytes;
use anyhow::Result;
use colored::Colorize;
use ethkit_merkle::{HashAlgorithm, HashProvider, HashValue};
use tracing::info;

pub fn handle(message: &str, hex: bool, algorithm: HashAlgorithm) -> Result<()> {
    let digest = compute(message, hex, algorithm)?;
    info!(%algorithm, bytes = message.len(), "hashed message");

    println!("  Input:     {}", message.cyan());
    println!("  {:<10} {}", format!("{}:", label(algorithm)), digest.to_string().green());
    Ok(())
}

pub fn compute(message: &str, hex: bool, algorithm: HashAlgorithm) -> Result<HashValue> {
    let bytes = input_bytes(message, hex)?;
    Ok(algorithm.hash(&bytes)?)
}

fn label(algorithm: HashAlgorithm) -> &'static str {
    match algorithm {
        HashAlgorithm::Sha3_256 => "SHA3-256",
        HashAlgorithm::Keccak256 => "Keccak-256",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethkit_merkle::{keccak256, sha3_256};

    #[test]
    fn test_compute_text_and_hex() {
        assert_eq!(compute("abc", false, HashAlgorithm::Sha3_256).unwrap(), sha3_256(b"abc"));
        assert_eq!(compute("0x616263", true, HashAlgorithm::Keccak256).unwrap(), keccak256(b"abc"));
        assert!(compute("0x6", true, HashAlgorithm::Sha3_256).is_err());
    }
}
