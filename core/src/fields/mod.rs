//! fields/mod.rs
//! Fixed-width metadata text fields.
//!
//! Notes:
//! - Text is stored as UTF-8, right-padded with zero bytes.
//! - Truncation is character-aware; a multi-byte character is never split.
//! - Decoding strips trailing zeros only, interior zeros are kept.

pub mod encode;
pub mod decode;

pub use encode::*;
pub use decode::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Field bytes (after stripping padding) are not valid UTF-8.
    #[error("field is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}
