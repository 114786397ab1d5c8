use hmac::{Hmac, Mac as _};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::TAG_SIZE;
use crate::error::{CryptError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Running HMAC-SHA-256 over the ciphertext blocks.
#[derive(Clone)]
pub struct Mac {
    inner: HmacSha256,
}

impl Mac {
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self { inner: HmacSha256::new_from_slice(key)? })
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub fn finalize(self) -> [u8; TAG_SIZE] {
        self.inner.finalize().into_bytes().into()
    }

    /// Finalizes a copy of the accumulator with `suffix` appended, leaving
    /// `self` untouched.
    pub fn finalize_with_suffix(&self, suffix: &[u8]) -> [u8; TAG_SIZE] {
        let mut mac = self.clone();
        mac.update(suffix);
        mac.finalize()
    }

    /// Compares the finalized tag against `expected` in constant time.
    pub fn verify(self, expected: &[u8; TAG_SIZE]) -> Result<()> {
        let computed = self.finalize();
        if !tags_equal(&computed, expected) {
            return Err(CryptError::Authentication);
        }
        Ok(())
    }
}

/// Constant-time tag equality.
#[inline]
pub fn tags_equal(computed: &[u8; TAG_SIZE], expected: &[u8; TAG_SIZE]) -> bool {
    bool::from(computed.ct_eq(expected))
}
