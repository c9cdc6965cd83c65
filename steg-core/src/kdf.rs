//! Passphrase-based key derivation and authenticated encryption.

use aead::generic_array::GenericArray;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{KEY_LEN, PBKDF2_ITERATIONS};
use crate::error::{StegError, StegResult};

/// The derived AES-256 key; zeroed when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// Derives the AEAD key from `passphrase` and the per-embed `salt` via
/// PBKDF2-HMAC-SHA256 at [`PBKDF2_ITERATIONS`] iterations.
///
/// Fails with [`StegError::KeyRequired`] on an empty passphrase.
pub fn derive_key(passphrase: &str, salt: &[u8; crate::consts::SALT_LEN]) -> StegResult<DerivedKey> {
    if passphrase.is_empty() {
        return Err(StegError::KeyRequired);
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    Ok(DerivedKey(key))
}

/// Encrypts `plaintext` under `key`/`nonce` with AES-256-GCM, no associated data.
/// Returns ciphertext with the 16-byte tag appended.
pub fn aead_encrypt(key: &DerivedKey, nonce: &[u8; crate::consts::NONCE_LEN], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));
    cipher
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .expect("AES-256-GCM encryption with a valid key/nonce cannot fail")
}

/// Decrypts and authenticates `ciphertext` under `key`/`nonce`.
///
/// Fails with [`StegError::AuthFailure`] on tag mismatch.
pub fn aead_decrypt(
    key: &DerivedKey,
    nonce: &[u8; crate::consts::NONCE_LEN],
    ciphertext: &[u8],
) -> StegResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));
    cipher
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| StegError::AuthFailure)
}
