use std::io::{Read, Write};

use tracing::{debug, instrument};

use crate::cipher::{BlockCipher, Chain, Derive, Mac};
use crate::config::{BLOCK_SIZE, EMPTY_INPUT_TAG_SUFFIX};
use crate::error::Result;
use crate::header::{Iv, Layout};
use crate::secret::SecretBytes;
use crate::ui::progress::Bar;

const BLOCK: u64 = BLOCK_SIZE as u64;

/// Writes `IV ‖ ciphertext ‖ tag` for one plaintext stream.
pub struct Encryptor<'a> {
    secret: &'a SecretBytes,
    progress: Option<&'a Bar>,
}

impl<'a> Encryptor<'a> {
    #[inline]
    pub fn new(secret: &'a SecretBytes) -> Self {
        Self { secret, progress: None }
    }

    #[inline]
    #[must_use]
    pub fn with_progress(mut self, bar: &'a Bar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Encrypts `size` bytes read from `input` into `output`.
    ///
    /// `size` must be known up front because it is bound into the IV, and
    /// `name` is the file name the IV is derived from. Exactly `size` bytes
    /// are consumed; an input that ends early fails with an I/O error.
    ///
    /// Returns the number of container bytes written.
    #[instrument(skip_all, fields(size = size))]
    pub fn encrypt<R: Read, W: Write>(&self, mut input: R, size: u64, name: &[u8], mut output: W) -> Result<u64> {
        let iv = Iv::derive(size, name);
        output.write_all(iv.as_bytes())?;

        let key = Derive::new(self.secret).stretch(&iv);
        let mut chain = Chain::new(BlockCipher::new(&key), &iv);
        let mut mac = Mac::new(key.expose_secret())?;

        let layout = Layout::for_plaintext(size);
        debug!(blocks = layout.blocks(), remainder = iv.remainder(), "encrypting stream");

        // A short final read keeps the previous ciphertext in the tail of
        // the buffer. The legacy format encrypts those bytes, so no padding.
        let mut buffer = [0u8; BLOCK_SIZE];
        let mut remaining = size;

        for _ in 0..layout.blocks() {
            let take = remaining.min(BLOCK);
            input.read_exact(&mut buffer[..take as usize])?;
            remaining -= take;

            buffer = chain.encrypt(buffer);
            mac.update(&buffer);
            output.write_all(&buffer)?;

            if let Some(bar) = self.progress {
                bar.add(take);
            }
        }

        let tag = if size == 0 { mac.finalize_with_suffix(EMPTY_INPUT_TAG_SUFFIX) } else { mac.finalize() };
        output.write_all(&tag)?;
        output.flush()?;

        Ok(layout.container_len())
    }
}
