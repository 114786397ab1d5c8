use std::io::{Read, Write};

use tracing::{debug, instrument, warn};

use crate::cipher::{BlockCipher, Chain, Derive, Mac, tags_equal};
use crate::config::{BLOCK_SIZE, EMPTY_INPUT_TAG_SUFFIX, TAG_SIZE};
use crate::error::{CryptError, Result};
use crate::header::{Iv, Layout};
use crate::secret::SecretBytes;
use crate::ui::progress::Bar;

/// Recovers the plaintext of one container and checks its tag.
pub struct Decryptor<'a> {
    secret: &'a SecretBytes,
    progress: Option<&'a Bar>,
}

impl<'a> Decryptor<'a> {
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

    /// Decrypts a container of `container_len` bytes read from `input`.
    ///
    /// The length is validated before anything is read, so a malformed
    /// container fails with [`CryptError::Format`] and produces no output.
    /// Every block but the last is written as soon as it is decrypted; the
    /// last one is written only once the tag has been verified. On
    /// [`CryptError::Authentication`] the bytes already written must be
    /// discarded by the caller.
    ///
    /// Returns the number of plaintext bytes written.
    #[instrument(skip_all, fields(container_len = container_len))]
    pub fn decrypt<R: Read, W: Write>(&self, mut input: R, container_len: u64, mut output: W) -> Result<u64> {
        let layout = Layout::from_container_len(container_len)?;

        let mut header = [0u8; BLOCK_SIZE];
        input.read_exact(&mut header)?;
        let iv = Iv::from_bytes(header);
        let remainder = iv.remainder();

        let key = Derive::new(self.secret).stretch(&iv);
        let mut chain = Chain::new(BlockCipher::new(&key), &iv);
        let mut mac = Mac::new(key.expose_secret())?;

        debug!(blocks = layout.blocks(), remainder, "decrypting stream");

        let mut written = 0u64;
        let mut held: Option<[u8; BLOCK_SIZE]> = None;
        let mut block = [0u8; BLOCK_SIZE];

        for _ in 0..layout.blocks() {
            input.read_exact(&mut block)?;
            mac.update(&block);
            let plain = chain.decrypt(block);

            if let Some(previous) = held.replace(plain) {
                self.emit(&mut output, &previous)?;
                written += BLOCK_SIZE as u64;
            }
        }

        let mut stored = [0u8; TAG_SIZE];
        input.read_exact(&mut stored)?;

        let keep = final_block_len(mac, &stored, layout, remainder).inspect_err(|_| warn!("tag mismatch"))?;
        if let Some(last) = held {
            self.emit(&mut output, &last[..keep])?;
            written += keep as u64;
        }
        output.flush()?;

        debug!(written, "tag verified");
        Ok(written)
    }

    fn emit<W: Write>(&self, output: &mut W, data: &[u8]) -> Result<()> {
        output.write_all(data)?;
        if let Some(bar) = self.progress {
            bar.add(data.len() as u64);
        }
        Ok(())
    }
}

/// Verifies the stored tag and returns how many bytes of the final block
/// belong to the plaintext.
///
/// A single block with a zero remainder is either a full 16-byte block or
/// the block produced for an empty input. Both candidate tags are computed
/// and compared in constant time; the one that matches decides.
fn final_block_len(mac: Mac, stored: &[u8; TAG_SIZE], layout: Layout, remainder: usize) -> Result<usize> {
    if layout.blocks() == 1 && remainder == 0 {
        let marked = mac.finalize_with_suffix(EMPTY_INPUT_TAG_SUFFIX);
        let full = mac.finalize();

        return match (tags_equal(&full, stored), tags_equal(&marked, stored)) {
            (true, _) => Ok(BLOCK_SIZE),
            (false, true) => Ok(0),
            (false, false) => Err(CryptError::Authentication),
        };
    }

    mac.verify(stored)?;
    Ok(if remainder == 0 { BLOCK_SIZE } else { remainder })
}
