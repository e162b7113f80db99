//! ethkit - hashing, Merkle root and account helper CLI

mod commands;
mod config;

use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use ethkit_merkle::HashAlgorithm;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ethkit")]
#[command(about = "Keccak-family hashing, Merkle roots and account helpers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (default: ~/.ethkit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hash algorithm: sha3-256 or keccak256
    #[arg(short, long, global = true)]
    algorithm: Option<HashAlgorithm>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the digest of a message
    Hash {
        message: String,

        /// Treat the message as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Derive an account address from a public key
    Address {
        public_key: String,

        /// Treat the public key as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Build a Merkle tree and print every level and the root
    Merkle {
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,

        /// Treat every item as hex-encoded bytes
        #[arg(long)]
        hex: bool,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate random private keys
    Keygen {
        /// Number of keys to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);
    if !config.color {
        colored::control::set_override(false);
    }

    let algorithm = cli.algorithm.unwrap_or(config.algorithm);
    debug!(%algorithm, "resolved hash algorithm");

    match cli.command {
        Commands::Hash { message, hex } => commands::hash::handle(&message, hex, algorithm),
        Commands::Address { public_key, hex } => {
            commands::address::handle(&public_key, hex, algorithm)
        }
        Commands::Merkle { items, hex, json } => {
            commands::merkle::handle(&items, hex, json, algorithm)
        }
        Commands::Keygen { count } => commands::keygen::handle(count),
        Commands::Config { action } => {
            commands::config::handle(action, &config, cli.config.as_deref(), cli.algorithm)
        }
    }
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level. Logs go to stderr.
fn init_tracing(config: &Config, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
