// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! Whole-payload AES-256-GCM envelope.
//!
//! Design notes:
//! - 32-byte key, 12-byte random nonce, 16-byte tag, no associated data.
//! - Envelope layout: `nonce || ciphertext || tag`.
//! - Tag verification must fail closed (no partial plaintext).
//! - Every open failure collapses into `AuthenticationFailed`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::nonce::{generate_nonce, split_envelope, validate_nonce_len};
use crate::crypto::types::{CryptoError, VacKey, ENVELOPE_OVERHEAD, KEY_LEN_32};

fn cipher_for(key: &VacKey) -> Result<Aes256Gcm, CryptoError> {
    Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.as_bytes().len(),
    })
}

/// Seal `plaintext` under `key` with a fresh random nonce.
///
/// Empty plaintext is valid and yields a 28-byte envelope.
pub fn seal(plaintext: &[u8], key: &VacKey) -> Result<Vec<u8>, CryptoError> {
    let nonce = generate_nonce()?;
    seal_with_nonce(plaintext, key, &nonce)
}

/// Seal with an explicit nonce. Only for fixed test vectors; production paths use [`seal`].
pub fn seal_with_nonce(plaintext: &[u8], key: &VacKey, nonce: &[u8]) -> Result<Vec<u8>, CryptoError> {
    validate_nonce_len(nonce)?;
    let cipher = cipher_for(key)?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;

    let mut out = Vec::with_capacity(plaintext.len() + ENVELOPE_OVERHEAD);
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Open `nonce || ciphertext_with_tag` under `key`.
///
/// # Errors
/// - `AuthenticationFailed` for short envelopes, wrong keys, and any corruption.
pub fn open(envelope: &[u8], key: &VacKey) -> Result<Vec<u8>, CryptoError> {
    let (nonce, ciphertext_and_tag) = split_envelope(envelope)?;
    let cipher = cipher_for(key)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
        .map_err(|_| CryptoError::AuthenticationFailed)
}
