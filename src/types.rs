//! Common type definitions for aescrypt2.
//!
//! - [`Processing`]: Distinguishes between encryption and decryption passes

use std::fmt::{Display, Formatter, Result};

/// Represents a processing operation in progress.
///
/// Provides display labels for progress indicators, prompts and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Processing {
    /// An encryption pass is in progress.
    Encryption,

    /// A decryption pass is in progress.
    Decryption,
}

impl Processing {
    /// Returns a progress label for the operation.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encryption => "Encrypting...",
            Self::Decryption => "Decrypting...",
        }
    }

    /// Returns the past-tense verb used in summaries.
    #[inline]
    pub fn done(self) -> &'static str {
        match self {
            Self::Encryption => "encrypted",
            Self::Decryption => "decrypted",
        }
    }
}

impl Display for Processing {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Encryption => f.write_str("encryption"),
            Self::Decryption => f.write_str("decryption"),
        }
    }
}
