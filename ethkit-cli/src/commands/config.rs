//! Config command handlers

use crate::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use ethkit_merkle::HashAlgorithm;
use std::path::{Path, PathBuf};

pub fn handle(
    action: crate::ConfigAction,
    config: &Config,
    path: Option<&Path>,
    algorithm: Option<HashAlgorithm>,
) -> Result<()> {
    match action {
        crate::ConfigAction::Show => {
            let effective = effective(config, algorithm);
            match resolve_path(path) {
                Ok(path) => println!("{} {}", "→".cyan().bold(), path.display().to_string().dimmed()),
                Err(_) => println!("{} {}", "→".cyan().bold(), "no config path".dimmed()),
            }
            print!("{}", effective.to_toml_string()?);
            Ok(())
        }

        crate::ConfigAction::Init { force } => {
            let path = resolve_path(path)?;
            init(&path, force)?;
            println!("{} Wrote default config to {}", "✓".green().bold(), path.display().to_string().cyan());
            Ok(())
        }
    }
}

/// The loaded config with command-line overrides applied
pub fn effective(config: &Config, algorithm: Option<HashAlgorithm>) -> Config {
    let mut effective = config.clone();
    if let Some(algorithm) = algorithm {
        effective.algorithm = algorithm;
    }
    effective
}

/// Write the default config to `path`; an existing file is kept unless `force`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists, pass --force to overwrite", path.display());
    }
    Config::default().save(path)
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path().context("Cannot determine home directory for config file"),
    }
}
