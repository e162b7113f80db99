//! Binary Merkle tree over an ordered list of items.
//!
//! # Construction
//!
//! - Level 0 holds `hash(item)` for every item, in input order.
//! - Each following level hashes adjacent pairs `(2k, 2k + 1)` of the previous one as
//!   `hash(hex(left) ++ hex(right))`. An odd last node is paired with itself.
//! - Construction stops at the first level with a single node, the root.
//!
//! Every level is retained so the tree can be printed and proofs can be served.
//!
//! # Example
//!
//! ```
//! use ethkit_merkle::{BinaryMerkleTree, HashAlgorithm};
//!
//! let items = [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];
//! let tree = BinaryMerkleTree::build(&items).unwrap();
//!
//! assert_eq!(tree.levels().len(), 3);
//! let proof = tree.get_proof(2).unwrap();
//! assert!(proof.verify(&HashAlgorithm::default(), &tree.root(), b"c", 2).is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{MerkleError, MerkleResult};
use crate::hash::{hash_leaf, hash_node, HashAlgorithm, HashProvider, HashValue};

/// Levels at least this wide are reduced on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1024;

/// A binary Merkle tree that keeps all of its levels.
///
/// Level 0 is the leaf level; the last level always contains exactly one hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMerkleTree {
    levels: Vec<Vec<HashValue>>,
    algorithm: &'static str,
}

impl BinaryMerkleTree {
    /// Build a tree with the default [`HashAlgorithm`].
    pub fn build<T: AsRef<[u8]>>(items: &[T]) -> MerkleResult<Self> {
        Self::build_with(&HashAlgorithm::default(), items)
    }

    /// Build a tree hashing with `provider`.
    ///
    /// Fails with [`MerkleError::EmptyInput`] when `items` is empty.
    pub fn build_with<P, T>(provider: &P, items: &[T]) -> MerkleResult<Self>
    where
        P: HashProvider + ?Sized,
        T: AsRef<[u8]>,
    {
        if items.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let leaves = items
            .iter()
            .map(|item| hash_leaf(provider, item.as_ref()))
            .collect::<MerkleResult<Vec<_>>>()?;

        let mut levels = vec![leaves];
        loop {
            let current = &levels[levels.len() - 1];
            if current.len() == 1 {
                break;
            }
            let next = reduce_level(provider, current)?;
            levels.push(next);
        }

        let tree = Self {
            levels,
            algorithm: provider.name(),
        };
        debug!(
            algorithm = tree.algorithm,
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            root = %tree.root(),
            "built merkle tree"
        );
        Ok(tree)
    }

    /// The root hash
    pub fn root(&self) -> HashValue {
        // `build_with` rejects empty input, so the final level always holds one hash
        self.levels[self.levels.len() - 1][0]
    }

    /// All levels, leaves first
    pub fn levels(&self) -> &[Vec<HashValue>] {
        &self.levels
    }

    /// The leaf hashes
    pub fn leaves(&self) -> &[HashValue] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, including the leaf and root levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Name of the hash provider the tree was built with
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Generate an inclusion proof for the leaf at `index`.
    pub fn get_proof(&self, index: usize) -> MerkleResult<BinaryMerkleProof> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(self.depth() - 1);
        let mut idx = index;
        for level in &self.levels[..self.depth() - 1] {
            // An unpaired last node was hashed with itself
            let sibling = level.get(idx ^ 1).unwrap_or(&level[idx]);
            siblings.push(*sibling);
            idx /= 2;
        }

        Ok(BinaryMerkleProof {
            siblings,
            leaf_count,
        })
    }
}

impl fmt::Display for BinaryMerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Merkle Tree ===")?;
        for (i, level) in self.levels.iter().enumerate() {
            writeln!(f, "Level {}:", i)?;
            for hash in level {
                writeln!(f, "  {}", hash)?;
            }
        }
        writeln!(f)?;
        write!(f, "Merkle Root: {}", self.root())
    }
}

fn reduce_level<P: HashProvider + ?Sized>(
    provider: &P,
    level: &[HashValue],
) -> MerkleResult<Vec<HashValue>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if level.len() >= PARALLEL_THRESHOLD {
            return level
                .par_chunks(2)
                .map(|pair| hash_pair(provider, pair))
                .collect();
        }
    }

    level
        .chunks(2)
        .map(|pair| hash_pair(provider, pair))
        .collect()
}

fn hash_pair<P: HashProvider + ?Sized>(provider: &P, pair: &[HashValue]) -> MerkleResult<HashValue> {
    let left = &pair[0];
    let right = pair.get(1).unwrap_or(left);
    hash_node(provider, left, right)
}

/// Inclusion proof for one leaf of a [`BinaryMerkleTree`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryMerkleProof {
    /// Sibling hash at every level below the root, leaf level first
    pub siblings: Vec<HashValue>,
    /// Number of leaves in the tree the proof was taken from
    pub leaf_count: usize,
}

impl BinaryMerkleProof {
    /// Check that `item` sits at `index` under `root`.
    pub fn verify<P: HashProvider + ?Sized>(
        &self,
        provider: &P,
        root: &HashValue,
        item: &[u8],
        index: usize,
    ) -> MerkleResult<()> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count,
            });
        }
        if self.siblings.len() != expected_siblings(self.leaf_count) {
            return Err(MerkleError::ProofVerificationFailed);
        }

        let mut current = hash_leaf(provider, item)?;
        let mut idx = index;
        for sibling in &self.siblings {
            current = if idx % 2 == 0 {
                hash_node(provider, &current, sibling)?
            } else {
                hash_node(provider, sibling, &current)?
            };
            idx /= 2;
        }

        if &current == root {
            Ok(())
        } else {
            Err(MerkleError::ProofVerificationFailed)
        }
    }
}

/// Number of levels above the leaves for a tree with `leaf_count` leaves
fn expected_siblings(leaf_count: usize) -> usize {
    let mut width = leaf_count;
    let mut count = 0;
    while width > 1 {
        width = width.div_ceil(2);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha3_256;

    fn items(n: usize) -> Vec<Vec<u8>> {
        (0..n).map(|i| format!("item{}", i).into_bytes()).collect()
    }

    fn node(left: &HashValue, right: &HashValue) -> HashValue {
        sha3_256(format!("{}{}", left, right).as_bytes())
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: Vec<Vec<u8>> = Vec::new();
        assert_eq!(
            BinaryMerkleTree::build(&empty),
            Err(MerkleError::EmptyInput)
        );
    }

    #[test]
    fn test_single_item_root_is_leaf() {
        let tree = BinaryMerkleTree::build(&[b"solo"]).unwrap();

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.root(), sha3_256(b"solo"));
        assert_eq!(tree.leaves(), &[sha3_256(b"solo")]);
    }

    #[test]
    fn test_two_items() {
        let tree = BinaryMerkleTree::build(&[b"A", b"B"]).unwrap();
        let expected = node(&sha3_256(b"A"), &sha3_256(b"B"));

        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.root(), expected);
    }

    #[test]
    fn test_odd_level_duplicates_last_node() {
        let tree = BinaryMerkleTree::build(&[b"A", b"B", b"C"]).unwrap();
        let (a, b, c) = (sha3_256(b"A"), sha3_256(b"B"), sha3_256(b"C"));

        let level1 = vec![node(&a, &b), node(&c, &c)];
        assert_eq!(tree.levels()[1], level1);
        assert_eq!(tree.root(), node(&level1[0], &level1[1]));
    }

    #[test]
    fn test_level_widths_halve_rounding_up() {
        for n in 1..=33 {
            let tree = BinaryMerkleTree::build(&items(n)).unwrap();
            let levels = tree.levels();

            assert_eq!(levels[0].len(), n);
            for pair in levels.windows(2) {
                assert_eq!(pair[1].len(), pair[0].len().div_ceil(2));
            }
            assert_eq!(levels.last().unwrap().len(), 1);
            assert_eq!(tree.depth() - 1, expected_siblings(n));
        }
    }

    #[test]
    fn test_algorithm_changes_root() {
        let data = items(5);
        let sha3 = BinaryMerkleTree::build_with(&HashAlgorithm::Sha3_256, &data).unwrap();
        let keccak = BinaryMerkleTree::build_with(&HashAlgorithm::Keccak256, &data).unwrap();

        assert_eq!(sha3.algorithm(), "sha3-256");
        assert_eq!(keccak.algorithm(), "keccak256");
        assert_ne!(sha3.root(), keccak.root());
    }

    #[test]
    fn test_proofs_for_all_leaves() {
        let provider = HashAlgorithm::default();
        for n in 1..=9 {
            let data = items(n);
            let tree = BinaryMerkleTree::build(&data).unwrap();
            let root = tree.root();

            for (i, item) in data.iter().enumerate() {
                let proof = tree.get_proof(i).unwrap();
                assert_eq!(proof.leaf_count, n);
                assert!(proof.verify(&provider, &root, item, i).is_ok());
            }
        }
    }

    #[test]
    fn test_proof_rejects_tampering() {
        let provider = HashAlgorithm::default();
        let data = items(6);
        let tree = BinaryMerkleTree::build(&data).unwrap();
        let root = tree.root();
        let proof = tree.get_proof(3).unwrap();

        assert_eq!(
            proof.verify(&provider, &root, b"forged", 3),
            Err(MerkleError::ProofVerificationFailed)
        );
        assert_eq!(
            proof.verify(&provider, &root, &data[3], 2),
            Err(MerkleError::ProofVerificationFailed)
        );
        assert_eq!(
            proof.verify(&provider, &sha3_256(b"other"), &data[3], 3),
            Err(MerkleError::ProofVerificationFailed)
        );
        assert_eq!(
            proof.verify(&provider, &root, &data[3], 6),
            Err(MerkleError::IndexOutOfRange {
                index: 6,
                leaf_count: 6
            })
        );

        let mut truncated = proof.clone();
        truncated.siblings.pop();
        assert_eq!(
            truncated.verify(&provider, &root, &data[3], 3),
            Err(MerkleError::ProofVerificationFailed)
        );
    }

    #[test]
    fn test_get_proof_out_of_range() {
        let tree = BinaryMerkleTree::build(&items(3)).unwrap();
        assert_eq!(
            tree.get_proof(3),
            Err(MerkleError::IndexOutOfRange {
                index: 3,
                leaf_count: 3
            })
        );
    }

    #[test]
    fn test_display_lists_levels_and_root() {
        let tree = BinaryMerkleTree::build(&[b"A", b"B"]).unwrap();
        let text = tree.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=== Merkle Tree ===");
        assert_eq!(lines[1], "Level 0:");
        assert_eq!(lines[2], format!("  {}", sha3_256(b"A")));
        assert_eq!(lines[3], format!("  {}", sha3_256(b"B")));
        assert_eq!(lines[4], "Level 1:");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], format!("Merkle Root: {}", tree.root()));
    }
}
