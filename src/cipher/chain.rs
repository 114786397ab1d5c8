//! # Block Chaining
//!
//! Chains the raw block cipher with an explicitly tracked chaining value:
//!
//! ```text
//! encrypt: C[i] = E(P[i] ^ chain)      chain = C[i]
//! decrypt: P[i] = D(C[i]) ^ chain      chain = C[i]
//! ```
//!
//! The chaining value starts as the IV and is always replaced by the
//! ciphertext of the block just processed, on both paths. Block `i` of a
//! decryption therefore sees the same chaining value block `i` saw during
//! encryption.

use crate::cipher::BlockCipher;
use crate::config::BLOCK_SIZE;
use crate::header::Iv;

/// Chaining state for one encryption or decryption pass.
pub struct Chain {
    cipher: BlockCipher,
    value: [u8; BLOCK_SIZE],
}

impl Chain {
    pub fn new(cipher: BlockCipher, iv: &Iv) -> Self {
        Self { cipher, value: *iv.as_bytes() }
    }

    /// Encrypts one block and advances the chain to its ciphertext.
    pub fn encrypt(&mut self, plain: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = xor_blocks(&plain, &self.value);
        self.cipher.encrypt_block(&mut block);
        self.value = block;
        block
    }

    /// Decrypts one block and advances the chain to the input ciphertext.
    pub fn decrypt(&mut self, cipher: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = cipher;
        self.cipher.decrypt_block(&mut block);
        let plain = xor_blocks(&block, &self.value);
        self.value = cipher;
        plain
    }

    #[cfg(test)]
    pub fn value(&self) -> &[u8; BLOCK_SIZE] {
        &self.value
    }
}

#[inline]
fn xor_blocks(a: &[u8; BLOCK_SIZE], b: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    std::array::from_fn(|i| a[i] ^ b[i])
}
