//! Tree construction: block ingestion, level generation, root retrieval.

use crate::{
    MerkleTreeError,
    hash::TreeHasher,
    helper,
    node::{Node, NodeId},
};

/// One tree level, ordered left-to-right.
pub(crate) type Level = Vec<NodeId>;

/// A binary Merkle tree over an ordered list of opaque blocks.
///
/// Blocks are appended incrementally with [`append_blocks`]; the levels are
/// built all at once by an explicit [`generate`] call, which rebuilds every
/// level from the current leaf set (there is no incremental re-hashing).
/// Levels are stored root-first: index 0 holds the single root node, the
/// last index holds the (possibly padded) leaf level.
///
/// All nodes live in a flat arena owned by the tree; children are arena
/// indices, so a self-paired node can sit under two parent slots.
///
/// The hasher is stateful (write, finalize, reset) and every mutating or
/// verifying operation takes `&mut self`, so shared use across threads must
/// be serialized by the caller.
///
/// [`append_blocks`]: MerkleTree::append_blocks
/// [`generate`]: MerkleTree::generate
#[derive(Debug, Clone)]
pub struct MerkleTree<H> {
    pub(crate) hasher: H,
    /// Arena of all nodes. Appends push leaf nodes at the end; `generate`
    /// compacts the arena back to the leaf set before rebuilding internal
    /// nodes, so superseded internals live only until the next rebuild.
    pub(crate) nodes: Vec<Node>,
    /// Raw blocks in insertion order.
    pub(crate) blocks: Vec<Vec<u8>>,
    /// One leaf id per block; when the block count is odd the final id is
    /// repeated so the leaf count is even.
    pub(crate) leaves: Vec<NodeId>,
    /// Levels root-first; empty until [`MerkleTree::generate`] succeeds.
    pub(crate) levels: Vec<Level>,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Create a tree over `blocks`, hashing with `hasher`.
    ///
    /// Equivalent to creating an empty tree and calling
    /// [`append_blocks`](MerkleTree::append_blocks); no levels are built
    /// until [`generate`](MerkleTree::generate).
    pub fn new<I>(hasher: H, blocks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut tree = MerkleTree {
            hasher,
            nodes: Vec::new(),
            blocks: Vec::new(),
            leaves: Vec::new(),
            levels: Vec::new(),
        };
        tree.append_blocks(blocks);
        tree
    }

    /// Append raw blocks, creating one leaf node (`hash = H(raw)`) per
    /// block.
    ///
    /// Blocks are opaque: no validation is performed and empty blocks are
    /// permitted. After appending, an odd leaf count is padded by repeating
    /// the last leaf id — the same node serves both slots, no fresh padding
    /// leaf is created. Only the block and leaf lists are touched: levels
    /// from a previous generation stay live, so [`root`](MerkleTree::root)
    /// and the verifiers keep answering for the previously generated tree
    /// (which does not cover the new blocks) until the next
    /// [`generate`](MerkleTree::generate).
    pub fn append_blocks<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        for block in blocks {
            let hash = self.hasher.hash(&block);
            let id: NodeId = self.nodes.len();
            self.nodes.push(Node::Leaf { raw: block.clone(), hash });
            self.blocks.push(block);
            self.leaves.push(id);
        }

        if self.leaves.len() % 2 == 1 {
            if let Some(&last) = self.leaves.last() {
                self.leaves.push(last);
            }
        }
    }

    /// Build every level from the current leaf set, bottom-up.
    ///
    /// Fails with [`MerkleTreeError::EmptyTree`] when no blocks have been
    /// ingested, leaving prior state untouched. Otherwise all levels are
    /// recomputed from scratch: adjacent nodes are paired into internal
    /// nodes (`hash = H(left || right)`), a final unpaired node is paired
    /// with itself, and construction stops once a single-node level — the
    /// root — is produced. Calling this repeatedly without appending is
    /// idempotent.
    pub fn generate(&mut self) -> Result<(), MerkleTreeError> {
        if self.blocks.is_empty() {
            return Err(MerkleTreeError::EmptyTree);
        }

        self.compact_to_leaves();

        // Capacity hint only; the loop below terminates on the root level.
        let height = helper::tree_height(self.blocks.len());
        let mut levels: Vec<Level> = Vec::with_capacity(height);

        let mut current = self.leaves.clone();
        levels.push(current.clone());
        while current.len() > 1 {
            current = self.build_level_above(&current);
            levels.push(current.clone());
        }

        levels.reverse();
        self.levels = levels;
        Ok(())
    }

    /// Pair adjacent nodes of `below` into the level above it.
    fn build_level_above(&mut self, below: &[NodeId]) -> Level {
        let count = below.len().div_ceil(2);
        let mut level = Vec::with_capacity(count);

        for i in 0..count {
            let left = below[2 * i];
            // Self-pairing: an unpaired final node is its own sibling.
            let right = below.get(2 * i + 1).copied().unwrap_or(left);

            let combined = {
                let left_hash = self.nodes[left].hash();
                let right_hash = self.nodes[right].hash();
                let mut buf = Vec::with_capacity(left_hash.len() + right_hash.len());
                buf.extend_from_slice(left_hash);
                buf.extend_from_slice(right_hash);
                buf
            };
            let hash = self.hasher.hash(&combined);

            let id: NodeId = self.nodes.len();
            self.nodes.push(Node::Internal { left, right, hash });
            level.push(id);
        }

        level
    }

    /// Rebuild the arena to hold only the leaf nodes, dropping the levels
    /// and internal nodes of a superseded generation.
    ///
    /// Duplicated leaf slots (padding) repeat the immediately preceding id,
    /// so they stay shared after remapping.
    fn compact_to_leaves(&mut self) {
        self.levels.clear();

        let mut nodes: Vec<Node> = Vec::with_capacity(self.blocks.len());
        let mut leaves: Vec<NodeId> = Vec::with_capacity(self.leaves.len());
        let mut last: Option<(NodeId, NodeId)> = None;
        for &id in &self.leaves {
            let new_id = match last {
                Some((old, new)) if old == id => new,
                _ => {
                    let new_id = nodes.len();
                    nodes.push(self.nodes[id].clone());
                    new_id
                }
            };
            leaves.push(new_id);
            last = Some((id, new_id));
        }
        self.nodes = nodes;
        self.leaves = leaves;
    }
}

impl<H> MerkleTree<H> {
    /// The root node, or `None` if the tree has not been generated.
    ///
    /// Appending blocks does not clear this: the root of the previous
    /// generation keeps being served until the next
    /// [`generate`](MerkleTree::generate).
    pub fn root(&self) -> Option<&Node> {
        let level = self.levels.first()?;
        level.first().map(|&id| &self.nodes[id])
    }

    /// Resolve an arena id — for example one returned by
    /// [`Node::children`] — to its node. `None` for ids outside the arena.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The root digest, or `None` if the tree has not been generated.
    pub fn root_hash(&self) -> Option<&[u8]> {
        self.root().map(Node::hash)
    }

    /// Raw blocks in insertion order.
    pub fn blocks(&self) -> &[Vec<u8>] {
        &self.blocks
    }

    /// Number of ingested raw blocks (unpadded).
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of leaf slots, including the duplicated slot added when the
    /// block count is odd.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of built levels; zero until generation succeeds.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
