//! # Error Types
//!
//! Every operation of the container protocol returns
//! [`Result<T, CryptError>`](CryptError). The variants keep the three
//! failure classes apart: a malformed container, a container that does not
//! authenticate under the given key, and an I/O problem.

use thiserror::Error;

/// The error type for all container operations.
#[derive(Error, Debug)]
pub enum CryptError {
    /// I/O error while reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container cannot be valid: too short, or the ciphertext region is
    /// not a whole number of blocks. Raised before any decryption.
    #[error("invalid container: {0}")]
    Format(String),

    /// The stored tag does not match the ciphertext.
    ///
    /// Either the key is wrong or the container was modified.
    #[error("HMAC check failed: wrong key, or file corrupted")]
    Authentication,

    /// A primitive rejected the key length.
    #[error("invalid key length")]
    KeyLength(#[from] hmac::digest::InvalidLength),
}

pub type Result<T> = std::result::Result<T, CryptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CryptError::Authentication.to_string(), "HMAC check failed: wrong key, or file corrupted");
        assert_eq!(CryptError::Format("too short".into()).to_string(), "invalid container: too short");

        let io = CryptError::from(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(io, CryptError::Io(_)));
    }
}
