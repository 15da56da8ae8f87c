// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Passphrase -> container key.
//!
//! Design:
//! - key = SHA-512(passphrase)[..32]
//! - Single iteration, no salt. Deterministic so the same passphrase opens every
//!   container ever written with it.
//!
//! Security notes:
//! - This is not password hardening; a weak passphrase is cheap to brute force.
//!   Moving to a memory-hard KDF changes the key for existing containers and
//!   therefore needs a new format version.

use sha2::{Digest, Sha512};
use tracing::debug;

use crate::crypto::types::{VacKey, KEY_LEN_32};

/// Derive the 32-byte container key from a passphrase.
#[inline]
pub fn derive_key(passphrase: &str) -> VacKey {
    let mut digest = Sha512::digest(passphrase.as_bytes());
    let mut key = [0u8; KEY_LEN_32];
    key.copy_from_slice(&digest[..KEY_LEN_32]);
    zeroize::Zeroize::zeroize(digest.as_mut_slice());

    debug!(passphrase_len = passphrase.chars().count(), "derived container key");
    VacKey::from_bytes(key)
}
