//! Tree node arena element.

/// Index of a node in the tree's arena.
///
/// Nodes are shared by index rather than owned references: leaf duplication
/// (odd block count) and self-pairing (odd level count) both put the SAME
/// node under two parent slots, which an exclusively-owned binary tree of
/// unique nodes cannot represent.
pub type NodeId = usize;

/// A tree element: a leaf carrying a raw block and its digest, or an
/// internal node carrying two child indices and the digest of its children's
/// digests concatenated left-then-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf node: `hash == H(raw)`.
    Leaf {
        /// The raw block this leaf was built from.
        raw: Vec<u8>,
        /// Digest of `raw`.
        hash: Vec<u8>,
    },
    /// Internal node: `hash == H(left.hash || right.hash)`. `left` and
    /// `right` may be the same id when the level below had an odd count.
    Internal {
        /// Left child index.
        left: NodeId,
        /// Right child index.
        right: NodeId,
        /// Digest of the concatenated child digests.
        hash: Vec<u8>,
    },
}

impl Node {
    /// The node's stored digest.
    pub fn hash(&self) -> &[u8] {
        match self {
            Node::Leaf { hash, .. } | Node::Internal { hash, .. } => hash,
        }
    }

    /// The raw block, for leaf nodes.
    pub fn raw(&self) -> Option<&[u8]> {
        match self {
            Node::Leaf { raw, .. } => Some(raw),
            Node::Internal { .. } => None,
        }
    }

    /// Child indices, for internal nodes.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((*left, *right)),
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
