//! Structural self-verification.
//!
//! This checks the tree top-down along ONE descent path. It is a partial
//! check by design: see [`MerkleTree::verify_tree`].

use crate::{hash::TreeHasher, node::NodeId, tree::MerkleTree};

impl<H: TreeHasher> MerkleTree<H> {
    /// Check stored digests along a single root-to-leaf descent.
    ///
    /// Starting at the root, each internal node's stored digest is
    /// recomputed as `H(left.hash || right.hash)` and compared; on a match
    /// the walk descends into the RIGHT child and repeats, terminating
    /// successfully on reaching a leaf. Returns `false` on the first
    /// mismatch, or if the tree has not been generated.
    ///
    /// This is NOT a full-tree audit: internal nodes off the right-preferred
    /// descent path are never rechecked, so corruption confined to them (or
    /// to leaves off the path) can go undetected here while still failing
    /// [`verify_proof`](MerkleTree::verify_proof) for the affected leaf.
    pub fn verify_tree(&mut self) -> bool {
        let root = match self.levels.first().and_then(|level| level.first()) {
            Some(&root) => root,
            None => return false,
        };
        self.verify_descent(root)
    }

    /// Walk down from `id`, checking each internal node's digest against
    /// its children, preferring the right child at every step.
    fn verify_descent(&mut self, mut id: NodeId) -> bool {
        loop {
            let Some((left, right)) = self.nodes[id].children() else {
                // Leaf: nothing below to check.
                return true;
            };

            let combined = {
                let left_hash = self.nodes[left].hash();
                let right_hash = self.nodes[right].hash();
                let mut buf = Vec::with_capacity(left_hash.len() + right_hash.len());
                buf.extend_from_slice(left_hash);
                buf.extend_from_slice(right_hash);
                buf
            };
            let recomputed = self.hasher.hash(&combined);
            if recomputed != self.nodes[id].hash() {
                return false;
            }

            id = right;
        }
    }
}
