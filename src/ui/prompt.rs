use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode, min_length};

use crate::secret::SecretBytes;
use crate::types::Processing;

/// Masked key entry on the terminal.
pub struct Prompt {
    key_min_length: usize,
}

impl Prompt {
    pub fn new(key_min_length: usize) -> Self {
        Self { key_min_length }
    }

    /// Reads the key for `processing`. Encryption asks for it twice.
    pub fn key(&self, processing: Processing) -> Result<SecretBytes> {
        let min = self.key_min_length;
        let message = match processing {
            Processing::Encryption => "Enter encryption key:",
            Processing::Decryption => "Enter decryption key:",
        };

        let prompt = Password::new(message).with_display_mode(PasswordDisplayMode::Masked).with_validator(min_length!(min, "key is too short"));
        let prompt = match processing {
            Processing::Encryption => prompt.with_custom_confirmation_message("Confirm key:").with_custom_confirmation_error_message("keys do not match"),
            Processing::Decryption => prompt.without_confirmation(),
        };

        let key = prompt.prompt().context("key input failed")?;

        Ok(SecretBytes::from_string(key))
    }
}
