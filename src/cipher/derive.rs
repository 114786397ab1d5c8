//! # Key Stretching
//!
//! Derives the per-file working key from the caller's key and the IV:
//!
//! ```text
//! digest = IV
//! repeat 8192 times: digest = SHA-256(digest ‖ key)
//! ```
//!
//! The first round hashes the 16-byte IV, every later round the 32-byte
//! digest of the previous one. Binding the IV in makes the same key yield a
//! different working key for every file, and the round count slows down
//! exhaustive search over short keys.

use tracing::trace;

use crate::cipher::Hash;
use crate::config::{BLOCK_SIZE, HASH_SIZE, KEY_STRETCH_ROUNDS};
use crate::header::Iv;
use crate::secret::{SecretBytes, WorkingKey};

/// Key schedule bound to one caller key.
pub struct Derive<'a> {
    secret: &'a SecretBytes,
}

impl<'a> Derive<'a> {
    #[inline]
    pub fn new(secret: &'a SecretBytes) -> Self {
        Self { secret }
    }

    /// Stretches the key against `iv` into the working key.
    ///
    /// Pure function of (key, IV): there is no salt or other state.
    pub fn stretch(&self, iv: &Iv) -> WorkingKey {
        let key = self.secret.expose_secret();
        let mut hasher = Hash::new();

        let mut digest = [0u8; HASH_SIZE];
        digest[..BLOCK_SIZE].copy_from_slice(iv.as_bytes());
        let mut len = BLOCK_SIZE;

        for _ in 0..KEY_STRETCH_ROUNDS {
            hasher.update(&digest[..len]).update(key);
            digest = hasher.finalize_reset();
            len = HASH_SIZE;
        }

        trace!(rounds = KEY_STRETCH_ROUNDS, "working key derived");

        let working = WorkingKey::new(digest);
        digest.fill(0);
        working
    }
}
