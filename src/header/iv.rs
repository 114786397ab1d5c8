use std::fmt;

use tracing::debug;

use crate::cipher::Hash;
use crate::config::{BLOCK_SIZE, REMAINDER_MASK};

/// The container header: one block derived from the plaintext's size and
/// name, whose low nibble records `size % 16`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Iv {
    bytes: [u8; BLOCK_SIZE],
}

impl Iv {
    /// Derives the IV for a plaintext of `file_size` bytes called `file_name`.
    ///
    /// `SHA-256(le64(file_size) ‖ file_name)[..16]`, with the low four bits
    /// of the last byte replaced by `file_size % 16`. The result is a
    /// deterministic nonce, not a random one: two different files with the
    /// same size and name get the same IV.
    pub fn derive(file_size: u64, file_name: &[u8]) -> Self {
        let digest = Hash::digest_parts(&[&file_size.to_le_bytes(), file_name]);

        let mut bytes = [0u8; BLOCK_SIZE];
        bytes.copy_from_slice(&digest[..BLOCK_SIZE]);

        let remainder = (file_size % BLOCK_SIZE as u64) as u8;
        bytes[BLOCK_SIZE - 1] = (bytes[BLOCK_SIZE - 1] & !REMAINDER_MASK) | remainder;

        let iv = Self { bytes };
        debug!(file_size, iv = %iv, "derived initialization vector");
        iv
    }

    /// Wraps an IV read back from a container.
    #[inline]
    pub const fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.bytes
    }

    /// Number of plaintext bytes in the final block, or 0 for a full block.
    #[inline]
    pub const fn remainder(&self) -> usize {
        (self.bytes[BLOCK_SIZE - 1] & REMAINDER_MASK) as usize
    }
}

impl fmt::Display for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({self})")
    }
}
