use std::io;
use thiserror::Error;

use crate::crypto::CryptoError;
use crate::headers::HeaderError;

/// Unified codec error.
/// - `Format`, `UnsupportedVersion` and `Authentication` are the caller-facing taxonomy.
/// - `From<T>` impls route lower-level errors so `?` works across the codec.
/// - None of these are transient; callers reject the file and move on.
#[derive(Debug, Error)]
pub enum VacError {
    /// Not a well-formed container: short header, bad magic, key size, or field encoding.
    #[error("format error: {0}")]
    Format(HeaderError),

    /// A container, but of a version this codec does not read.
    #[error("unsupported container version {have} (supported: {supported})")]
    UnsupportedVersion { have: u32, supported: u32 },

    /// Wrong passphrase, corruption or tampering. Deliberately indistinguishable.
    #[error("authentication failed: wrong passphrase or corrupted container")]
    Authentication,

    /// Non-authentication crypto failure (RNG, cipher init).
    #[error("crypto error: {0}")]
    Crypto(CryptoError),

    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl From<HeaderError> for VacError {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::UnsupportedVersion { have, supported } => {
                VacError::UnsupportedVersion { have, supported }
            }
            other => VacError::Format(other),
        }
    }
}

impl From<CryptoError> for VacError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::AuthenticationFailed => VacError::Authentication,
            other => VacError::Crypto(other),
        }
    }
}

impl From<serde_json::Error> for VacError {
    fn from(e: serde_json::Error) -> Self {
        VacError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VacError>;
