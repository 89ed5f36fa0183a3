//! Inclusion-proof verification.
//!
//! A proof here is not a detached sibling list: the tree re-derives the
//! single path from a chosen leaf up to the root in place, recomputing each
//! ancestor's digest from the stored child digests and comparing it against
//! the stored ancestor. Siblings off that path are never touched.

use crate::{hash::TreeHasher, tree::MerkleTree};

/// Picks the leaf to prove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofSelector<'a> {
    /// Prove the leaf at this index in the (padded) leaf level.
    ByIndex(usize),
    /// Prove the block byte-equal to this value. Blocks are scanned in
    /// order and the LAST match wins when duplicates exist.
    ByValue(&'a [u8]),
}

/// Why a proof failed to verify.
///
/// The primary verification contract is the boolean returned by
/// [`MerkleTree::verify_proof`]; this enum is the optional diagnostic
/// behind it and carries no obligation for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofFailure {
    /// No levels exist: `generate` never ran, or ran after the last append.
    TreeNotGenerated,
    /// The selector index is outside the padded leaf level.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of leaf slots in the tree.
        leaf_count: usize,
    },
    /// No ingested block is byte-equal to the selector value.
    BlockNotFound,
    /// A recomputed ancestor digest differed from the stored one at this
    /// level depth (0 = root level).
    MismatchAtLevel(usize),
    /// A level slot did not hold the node shape the walk requires; the
    /// tree's internal structure has been corrupted.
    InconsistentLevels,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Verify that the selected leaf is included in the generated tree.
    ///
    /// `ByValue` scans the block list for byte equality (last match wins);
    /// `ByIndex` addresses the padded leaf level directly. A missing block,
    /// an out-of-range index, or an ungenerated tree all yield `false` —
    /// use [`verify_proof_with_reason`](MerkleTree::verify_proof_with_reason)
    /// to tell them apart.
    pub fn verify_proof(&mut self, selector: ProofSelector<'_>) -> bool {
        self.verify_proof_with_reason(selector).is_ok()
    }

    /// [`verify_proof`](MerkleTree::verify_proof) with the failure reason
    /// spelled out.
    pub fn verify_proof_with_reason(
        &mut self,
        selector: ProofSelector<'_>,
    ) -> Result<(), ProofFailure> {
        if self.levels.is_empty() {
            return Err(ProofFailure::TreeNotGenerated);
        }

        let index = match selector {
            ProofSelector::ByIndex(index) => index,
            ProofSelector::ByValue(value) => {
                let mut found = None;
                for (i, block) in self.blocks.iter().enumerate() {
                    if block.as_slice() == value {
                        found = Some(i);
                    }
                }
                found.ok_or(ProofFailure::BlockNotFound)?
            }
        };

        if index >= self.leaves.len() {
            return Err(ProofFailure::IndexOutOfRange {
                index,
                leaf_count: self.leaves.len(),
            });
        }

        self.walk_to_root(index)
    }

    /// Walk from the leaf at `index` in the deepest level up to the root,
    /// checking every ancestor digest on the way.
    ///
    /// At each step the parent sits at `index >> 1` one level up; whether
    /// the current node is the left or right child decides the
    /// concatenation order for the recomputed parent digest.
    fn walk_to_root(&mut self, mut index: usize) -> Result<(), ProofFailure> {
        let mut depth = self.levels.len() - 1;

        while depth > 0 {
            let parent_depth = depth - 1;
            let parent_index = index >> 1;

            let combined = {
                let current_id = *self.levels[depth]
                    .get(index)
                    .ok_or(ProofFailure::InconsistentLevels)?;
                let parent_id = *self.levels[parent_depth]
                    .get(parent_index)
                    .ok_or(ProofFailure::InconsistentLevels)?;
                let (left, right) = self.nodes[parent_id]
                    .children()
                    .ok_or(ProofFailure::InconsistentLevels)?;

                let current_hash = self.nodes[current_id].hash();
                let sibling_hash = if index % 2 == 1 {
                    self.nodes[left].hash()
                } else {
                    self.nodes[right].hash()
                };

                let mut buf = Vec::with_capacity(current_hash.len() + sibling_hash.len());
                if index % 2 == 1 {
                    buf.extend_from_slice(sibling_hash);
                    buf.extend_from_slice(current_hash);
                } else {
                    buf.extend_from_slice(current_hash);
                    buf.extend_from_slice(sibling_hash);
                }
                buf
            };

            let recomputed = self.hasher.hash(&combined);
            let parent_id = self.levels[parent_depth][parent_index];
            if recomputed != self.nodes[parent_id].hash() {
                return Err(ProofFailure::MismatchAtLevel(parent_depth));
            }

            index = parent_index;
            depth = parent_depth;
        }

        Ok(())
    }
}
