//! Keygen command handler

use anyhow::{Context, Result};
use colored::Colorize;
use ethkit_keys::PrivateKey;
use tracing::info;

pub fn handle(count: usize) -> Result<()> {
    let keys = generate(count)?;
    info!(count = keys.len(), "generated private keys");

    for key in &keys {
        println!("{} {}", "Generated Private Key:".bold(), key.to_hex().green());
    }
    println!("{} Keep this secret!", "!".yellow().bold());
    Ok(())
}

pub fn generate(count: usize) -> Result<Vec<PrivateKey>> {
    (0..count)
        .map(|_| PrivateKey::generate().context("Failed to generate private key"))
        .collect()
}
