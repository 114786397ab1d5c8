//! Global Configuration Constants
//!
//! This module contains the fixed parameters of the aescrypt2 container
//! format. There is exactly one construction, so none of these values are
//! negotiated or stored in the container; changing any of them produces
//! containers the legacy program cannot read.
//!
//! ## Container Layout
//!
//! ```text
//! offset 0         : IV, BLOCK_SIZE bytes (last byte's low nibble = size % BLOCK_SIZE)
//! offset 16        : ciphertext blocks, N × BLOCK_SIZE bytes
//! offset end - 32  : HMAC-SHA-256 tag, TAG_SIZE bytes
//! ```

/// Application name used in user interfaces
pub const APP_NAME: &str = "aescrypt2";

// === Primitive Sizes ===

/// AES block size in bytes
///
/// Also the size of the IV and of the chaining value.
pub const BLOCK_SIZE: usize = 16;

/// Size of the working key in bytes
///
/// The full SHA-256 digest keys both AES-256 and HMAC-SHA-256.
pub const KEY_SIZE: usize = 32;

/// Size of SHA-256 digests
pub const HASH_SIZE: usize = 32;

/// Size of the HMAC-SHA-256 trailer in bytes
pub const TAG_SIZE: usize = 32;

// === Key Schedule ===

/// Number of `SHA-256(digest ‖ key)` rounds applied to the IV
///
/// Fixed by the format. A file encrypted with a different count cannot be
/// decrypted.
pub const KEY_STRETCH_ROUNDS: usize = 8192;

// === Length Remainder ===

/// Bits of the last IV byte that carry `file_size % BLOCK_SIZE`
pub const REMAINDER_MASK: u8 = 0x0F;

/// Size of the header (the IV) in bytes
pub const HEADER_SIZE: u64 = BLOCK_SIZE as u64;

/// Smallest container that can be valid: an IV and a tag with no blocks
pub const MIN_CONTAINER_SIZE: u64 = (BLOCK_SIZE + TAG_SIZE) as u64;

/// Bytes appended to the MAC input of a container made from an empty file
///
/// An empty file and a 16-byte file both encrypt to one block with a
/// remainder of zero. The suffix makes their tags differ so decryption
/// knows whether to emit the block.
pub const EMPTY_INPUT_TAG_SUFFIX: &[u8] = &[0x00];

// === User Interface ===

/// Minimum key length accepted by the interactive prompt
pub const KEY_MIN_LENGTH: usize = 1;
