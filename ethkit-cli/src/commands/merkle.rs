//! Merkle command handler

use super::input_bytes;
use anyhow::Result;
use ethkit_merkle::{BinaryMerkleTree, HashAlgorithm, HashValue};
use serde::Serialize;
use tracing::info;

/// JSON form of a built tree
#[derive(Debug, Serialize)]
pub struct MerkleReport<'a> {
    pub algorithm: &'a str,
    pub leaf_count: usize,
    pub root: HashValue,
    pub levels: &'a [Vec<HashValue>],
}

impl<'a> From<&'a BinaryMerkleTree> for MerkleReport<'a> {
    fn from(tree: &'a BinaryMerkleTree) -> Self {
        Self {
            algorithm: tree.algorithm(),
            leaf_count: tree.leaf_count(),
            root: tree.root(),
            levels: tree.levels(),
        }
    }
}

pub fn handle(items: &[String], hex: bool, json: bool, algorithm: HashAlgorithm) -> Result<()> {
    let tree = build(items, hex, algorithm)?;
    info!(%algorithm, leaves = tree.leaf_count(), root = %tree.root(), "built merkle tree");

    println!("{}", render(&tree, json)?);
    Ok(())
}

/// JSON report, or the tree's own level-by-level listing
pub fn render(tree: &BinaryMerkleTree, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&MerkleReport::from(tree))?)
    } else {
        Ok(format!("\n{}", tree))
    }
}

pub fn build(items: &[String], hex: bool, algorithm: HashAlgorithm) -> Result<BinaryMerkleTree> {
    let data = items
        .iter()
        .map(|item| input_bytes(item, hex))
        .collect::<Result<Vec<_>>>()?;
    Ok(BinaryMerkleTree::build_with(&algorithm, &data)?)
}
