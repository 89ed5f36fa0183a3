//! Pluggable digest primitive.
//!
//! The tree never hashes directly; it goes through [`TreeHasher`], which
//! hides the write-then-finalize-then-reset lifecycle of a concrete hash
//! object behind a single call. Two adapters are provided: one over any
//! RustCrypto [`digest::Digest`] implementation and one over
//! [`blake3::Hasher`].

use digest::{Digest, FixedOutputReset};

/// A resettable digest primitive supplied by the caller.
///
/// Implementations must be deterministic: identical input bytes produce an
/// identical fixed-length digest. The hasher is stateful between the write
/// and the finalize; implementations must leave themselves reset and ready
/// for the next call when `hash` returns. The tree finishes one full
/// hash-and-reset cycle before issuing the next, so no reentrancy is
/// required.
pub trait TreeHasher {
    /// Digest `bytes`, returning the fixed-length output.
    fn hash(&mut self, bytes: &[u8]) -> Vec<u8>;
}

/// Adapter over any RustCrypto digest (SHA-2 family, SHA-3, ...).
///
/// Construct via `Default`, e.g. `Sha256Hasher::default()`.
#[derive(Debug, Clone, Default)]
pub struct CryptoHasher<D>(D);

impl<D: Digest + FixedOutputReset> TreeHasher for CryptoHasher<D> {
    fn hash(&mut self, bytes: &[u8]) -> Vec<u8> {
        Digest::update(&mut self.0, bytes);
        self.0.finalize_reset().to_vec()
    }
}

/// [`CryptoHasher`] over SHA-256.
pub type Sha256Hasher = CryptoHasher<sha2::Sha256>;

/// Adapter over [`blake3::Hasher`].
#[derive(Clone)]
pub struct Blake3Hasher(blake3::Hasher);

impl Default for Blake3Hasher {
    fn default() -> Self {
        Blake3Hasher(blake3::Hasher::new())
    }
}

impl core::fmt::Debug for Blake3Hasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Blake3Hasher")
    }
}

impl TreeHasher for Blake3Hasher {
    fn hash(&mut self, bytes: &[u8]) -> Vec<u8> {
        self.0.update(bytes);
        let digest = *self.0.finalize().as_bytes();
        self.0.reset();
        digest.to_vec()
    }
}
