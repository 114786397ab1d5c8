use crate::config::{BLOCK_SIZE, HEADER_SIZE, MIN_CONTAINER_SIZE, TAG_SIZE};
use crate::error::{CryptError, Result};

const BLOCK: u64 = BLOCK_SIZE as u64;

/// Geometry of a container: how many ciphertext blocks sit between the IV
/// and the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    blocks: u64,
}

impl Layout {
    /// Layout produced when encrypting `size` bytes.
    ///
    /// Encryption always runs at least once, so an empty input still gets
    /// one block.
    pub fn for_plaintext(size: u64) -> Self {
        Self { blocks: size.div_ceil(BLOCK).max(1) }
    }

    /// Validates a container length before anything is read from it.
    pub fn from_container_len(len: u64) -> Result<Self> {
        if len < MIN_CONTAINER_SIZE {
            return Err(CryptError::Format(format!("{len} bytes is shorter than the {MIN_CONTAINER_SIZE}-byte minimum")));
        }

        let body = len - MIN_CONTAINER_SIZE;
        if !body.is_multiple_of(BLOCK) {
            return Err(CryptError::Format(format!("ciphertext region of {body} bytes is not a multiple of {BLOCK_SIZE}")));
        }

        Ok(Self { blocks: body / BLOCK })
    }

    #[inline]
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }

    #[inline]
    pub const fn container_len(&self) -> u64 {
        HEADER_SIZE + self.blocks * BLOCK + TAG_SIZE as u64
    }
}
