//! Command handlers

pub mod address;
pub mod config;
pub mod hash;
pub mod keygen;
pub mod merkle;

use anyhow::{Context, Result};

/// Bytes of a command-line argument: its UTF-8 text, or its hex decoding with `--hex`.
pub fn input_bytes(arg: &str, hex: bool) -> Result<Vec<u8>> {
    if hex {
        ethkit_keys::decode_hex(arg).with_context(|| format!("Invalid hex argument '{}'", arg))
    } else {
        Ok(arg.as_bytes().to_vec())
    }
}
