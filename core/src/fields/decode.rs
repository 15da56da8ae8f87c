// ## 📂 File: `src/fields/decode.rs`
//! src/fields/decode.rs
//!
//! Fixed-width field bytes -> text.

use crate::fields::FieldError;

/// Strip trailing zero padding and decode the rest as UTF-8.
///
/// Writers that cut fields at a raw byte offset can leave an incomplete
/// character at the end; that tail is dropped.
///
/// # Returns
/// - `Ok(String)` on success (empty for an all-zero field).
/// - `Err(FieldError::InvalidUtf8)` if an invalid byte sequence appears before the end.
pub fn decode_field(bytes: &[u8]) -> Result<String, FieldError> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let text = &bytes[..end];
    match std::str::from_utf8(text) {
        Ok(s) => Ok(s.to_owned()),
        // Incomplete trailing sequence: keep the whole characters before it.
        Err(e) if e.error_len().is_none() => Ok(String::from_utf8_lossy(&text[..e.valid_up_to()]).into_owned()),
        Err(e) => Err(FieldError::InvalidUtf8 { valid_up_to: e.valid_up_to() }),
    }
}
