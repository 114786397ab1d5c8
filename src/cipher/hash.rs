//! Incremental SHA-256.
//!
//! Thin wrapper over [`sha2::Sha256`] used by IV derivation and the key
//! schedule. Both feed the hash in several parts, so the wrapper keeps the
//! streaming `update`/`finalize` shape rather than a one-shot digest.

use sha2::{Digest, Sha256};

use crate::config::HASH_SIZE;

/// A running SHA-256 computation.
#[derive(Clone, Default)]
pub struct Hash {
    inner: Sha256,
}

impl Hash {
    #[inline]
    pub fn new() -> Self {
        Self { inner: Sha256::new() }
    }

    /// Computes the digest of the concatenation of `parts`.
    pub fn digest_parts(parts: &[&[u8]]) -> [u8; HASH_SIZE] {
        let mut hash = Self::new();
        parts.iter().for_each(|part| {
            hash.update(part);
        });
        hash.finalize()
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    #[inline]
    pub fn finalize(self) -> [u8; HASH_SIZE] {
        self.inner.finalize().into()
    }

    /// Returns the digest and resets the state for the next message.
    #[inline]
    pub fn finalize_reset(&mut self) -> [u8; HASH_SIZE] {
        self.inner.finalize_reset().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let digest = Hash::digest_parts(&[b"abc"]);
        assert_eq!(hex::encode(digest), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn test_parts_equal_concatenation() {
        let whole = Hash::digest_parts(&[b"hello world"]);
        let split = Hash::digest_parts(&[b"hello", b" ", b"world"]);
        assert_eq!(whole, split);
    }

    #[test]
    fn test_finalize_reset() {
        let mut hash = Hash::new();
        hash.update(b"abc");
        let first = hash.finalize_reset();
        hash.update(b"abc");
        assert_eq!(first, hash.finalize_reset());
    }
}
