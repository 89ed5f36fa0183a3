//! Binary Merkle tree over an ordered collection of opaque blocks.
//!
//! The tree is built bottom-up by pairwise hashing: every block becomes a
//! leaf (`hash = H(raw)`), adjacent nodes are combined into internal nodes
//! (`hash = H(left || right)`, no delimiter), and a level with an odd node
//! count pairs its final node with itself. The digest primitive is supplied
//! by the caller through the [`TreeHasher`] trait, so any fixed-output hash
//! (SHA-256, Blake3, ...) can drive the tree.
//!
//! # Core types
//!
//! - [`MerkleTree`] — block ingestion, level generation, root retrieval.
//! - [`ProofSelector`] — pick a leaf to prove, by index or by block value.
//! - [`ProofFailure`] — optional diagnostic for a failed verification.
//!
//! # Verification
//!
//! - [`MerkleTree::verify_proof`] re-derives the single leaf-to-root path
//!   and checks every ancestor digest along it.
//! - [`MerkleTree::verify_tree`] walks ONE root-to-leaf descent
//!   (right-preferred) checking stored digests. It is a partial structural
//!   check, not an audit of every internal node; see the method docs.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod helper;
mod node;
mod proof;
mod tree;
mod verify;


pub use error::MerkleTreeError;
pub use hash::{Blake3Hasher, CryptoHasher, Sha256Hasher, TreeHasher};
pub use node::{Node, NodeId};
pub use proof::{ProofFailure, ProofSelector};
pub use tree::MerkleTree;
