//! # Block Cipher Primitive
//!
//! AES-128-ECB with zero padding, the transform the panel wire protocol
//! defines for its initializer payloads.
//!
//! ECB is mandated by the protocol and only ever applied here to one or two
//! blocks of random material, never to structured traffic; the session
//! itself is encrypted by an external cipher collaborator under the
//! negotiated key.
//!
//! A [`BlockCipher`] is cheap to construct and is intended to live no
//! longer than the handshake call that needed it.

use crate::error::{LinkError, Result};
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Block};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Length of an AES-128 key in bytes.
pub const KEY_LEN: usize = 16;

/// A scoped AES-128-ECB transform.
pub struct BlockCipher {
    cipher: Aes128,
}

impl BlockCipher {
    /// Build a cipher context for `key`.
    ///
    /// The caller keeps ownership of the key bytes and should zeroize them
    /// once the context exists.
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        Self {
            cipher: Aes128::new(&(*key).into()),
        }
    }

    /// ECB-encrypt `plaintext`, zero-padding it up to a whole block.
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = plaintext.to_vec();
        let rem = out.len() % BLOCK_LEN;
        if rem != 0 {
            out.resize(out.len() + BLOCK_LEN - rem, 0);
        }
        for chunk in out.chunks_exact_mut(BLOCK_LEN) {
            self.cipher.encrypt_block(Block::from_mut_slice(chunk));
        }
        out
    }

    /// ECB-decrypt `ciphertext`.
    ///
    /// Zero padding is not stripped: the protocol's plaintexts are always
    /// whole blocks, so the output length equals the input length. Fails
    /// with [`LinkError::CipherInput`] when the input is not a whole number
    /// of blocks.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(LinkError::CipherInput(ciphertext.len()));
        }
        let mut out = ciphertext.to_vec();
        for chunk in out.chunks_exact_mut(BLOCK_LEN) {
            self.cipher.decrypt_block(Block::from_mut_slice(chunk));
        }
        Ok(out)
    }
}
