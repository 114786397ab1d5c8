//! File-level encryption and decryption.
//!
//! Wires a validated [`File`] and a [`Destination`] to the stream layer:
//! the output is staged, the pass runs with a progress bar, and the staged
//! output is published only when the whole pass succeeded.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::MIN_CONTAINER_SIZE;
use crate::file::{Destination, File};
use crate::secret::SecretBytes;
use crate::stream::{Decryptor, Encryptor};
use crate::types::Processing;
use crate::ui::progress::Bar;

pub struct Processor {
    secret: SecretBytes,
}

impl Processor {
    pub fn new(secret: SecretBytes) -> Self {
        Self { secret }
    }

    /// Encrypts `input` into a container at `output`.
    ///
    /// Returns the container size in bytes.
    pub fn encrypt(&self, input: &mut File, output: &Destination) -> Result<u64> {
        let size = input.size()?;
        let reader = input.reader()?;
        let mut staged = output.stage()?;

        let bar = Bar::new(size, Processing::Encryption.label())?;
        let written = Encryptor::new(&self.secret).with_progress(&bar).encrypt(reader, size, input.name_bytes(), &mut staged).context("encryption pass failed")?;
        bar.finish();

        staged.commit()?;
        info!(input = %input.path().display(), output = %output, written, "file encrypted");

        Ok(written)
    }

    /// Decrypts the container `input` into `output`.
    ///
    /// Nothing reaches `output` unless the tag verified. Returns the
    /// plaintext size in bytes.
    pub fn decrypt(&self, input: &mut File, output: &Destination) -> Result<u64> {
        let container_len = input.size()?;
        let reader = input.reader()?;
        let mut staged = output.stage()?;

        let bar = Bar::new(container_len.saturating_sub(MIN_CONTAINER_SIZE), Processing::Decryption.label())?;
        let written = Decryptor::new(&self.secret).with_progress(&bar).decrypt(reader, container_len, &mut staged).context("decryption pass failed")?;
        bar.finish();

        staged.commit()?;
        info!(input = %input.path().display(), output = %output, written, "file decrypted");

        Ok(written)
    }
}
