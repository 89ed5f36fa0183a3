use thiserror::Error;

/// Errors from Merkle tree construction.
///
/// Verification failures are not errors: the verification APIs reduce to a
/// boolean (with [`crate::ProofFailure`] as an optional diagnostic channel).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// Tried to generate a tree with no ingested blocks.
    #[error("cannot generate tree: no blocks have been ingested")]
    EmptyTree,
}
