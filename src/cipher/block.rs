use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::config::BLOCK_SIZE;
use crate::secret::WorkingKey;

/// AES-256 used one block at a time, with no chaining of its own.
pub struct BlockCipher {
    inner: Aes256,
}

impl BlockCipher {
    pub fn new(key: &WorkingKey) -> Self {
        Self { inner: Aes256::new(GenericArray::from_slice(key.expose_secret())) }
    }

    #[inline]
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.inner.encrypt_block(aes::Block::from_mut_slice(block));
    }

    #[inline]
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.inner.decrypt_block(aes::Block::from_mut_slice(block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197, appendix C.3
    fn fips_cipher() -> BlockCipher {
        let key: [u8; 32] = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap().try_into().unwrap();
        BlockCipher::new(&WorkingKey::new(key))
    }

    #[test]
    fn test_fips197_encrypt() {
        let mut block: [u8; BLOCK_SIZE] = hex::decode("00112233445566778899aabbccddeeff").unwrap().try_into().unwrap();
        fips_cipher().encrypt_block(&mut block);
        assert_eq!(hex::encode(block), "8ea2b7ca516745bfeafc49904b496089");
    }

    #[test]
    fn test_fips197_decrypt() {
        let mut block: [u8; BLOCK_SIZE] = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap().try_into().unwrap();
        fips_cipher().decrypt_block(&mut block);
        assert_eq!(hex::encode(block), "00112233445566778899aabbccddeeff");
    }
}
