// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Per-container random nonces.
//!
//! Design:
//! - Every seal draws a fresh 12-byte nonce from the OS CSPRNG.
//! - No counters and no state, so there is nothing to persist across restarts
//!   and nothing shared between threads.
//!
//! Security notes:
//! - A (key, nonce) pair must never repeat. Keys here are passphrase-derived and
//!   reused across files, so the nonce is the only source of uniqueness.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CryptoError, NONCE_LEN_12};

/// Draw a fresh random 12-byte nonce.
#[inline]
pub fn generate_nonce() -> Result<[u8; NONCE_LEN_12], CryptoError> {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::Failure(format!("nonce generation failed: {e}")))?;
    Ok(nonce)
}

/// Validate a caller-supplied nonce length.
#[inline]
pub fn validate_nonce_len(nonce: &[u8]) -> Result<(), CryptoError> {
    if nonce.len() != NONCE_LEN_12 {
        return Err(CryptoError::InvalidNonceLen { expected: NONCE_LEN_12, actual: nonce.len() });
    }
    Ok(())
}

/// Split `nonce || ciphertext_with_tag`.
///
/// Returns `AuthenticationFailed` if the envelope cannot even hold a nonce.
#[inline]
pub fn split_envelope(envelope: &[u8]) -> Result<(&[u8], &[u8]), CryptoError> {
    if envelope.len() < NONCE_LEN_12 {
        return Err(CryptoError::AuthenticationFailed);
    }
    Ok(envelope.split_at(NONCE_LEN_12))
}
