use secrecy::{ExposeSecret, SecretBox};

use crate::config::KEY_SIZE;

/// Caller-supplied key of arbitrary length.
pub struct SecretBytes {
    inner: SecretBox<Vec<u8>>,
}

impl SecretBytes {
    #[cfg(test)]
    pub fn new(data: &[u8]) -> Self {
        Self { inner: SecretBox::new(Box::new(data.to_vec())) }
    }

    pub fn from_string(key: String) -> Self {
        Self { inner: SecretBox::new(Box::new(key.into_bytes())) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([... {} bytes ...])", self.inner.expose_secret().len())
    }
}

/// Stretched per-file key. Zeroized when dropped.
pub struct WorkingKey {
    inner: SecretBox<[u8; KEY_SIZE]>,
}

impl WorkingKey {
    pub fn new(key: [u8; KEY_SIZE]) -> Self {
        Self { inner: SecretBox::new(Box::new(key)) }
    }

    pub fn expose_secret(&self) -> &[u8; KEY_SIZE] {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for WorkingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WorkingKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak() {
        let key = SecretBytes::new(b"hunter2");
        assert_eq!(format!("{key:?}"), "SecretBytes([... 7 bytes ...])");

        let working = WorkingKey::new([0xAB; KEY_SIZE]);
        assert!(!format!("{working:?}").contains("ab"));
    }

    #[test]
    fn test_from_string() {
        let key = SecretBytes::from_string("secret".to_owned());
        assert_eq!(key.expose_secret(), b"secret");
        assert!(!key.is_empty());
        assert!(SecretBytes::new(b"").is_empty());
    }
}
