// ## 📂 File: `src/fields/encode.rs`
//! src/fields/encode.rs
//!
//! Text -> fixed-width field bytes.
//!
//! Design notes:
//! - Over-long text keeps `width - 3` characters and gains a `...` marker.
//! - Multi-byte text can still overflow `width` bytes after the character cut;
//!   the byte guard then backs off to the last character boundary that leaves
//!   room for the marker.
//! - Output is always exactly `width` bytes.

use crate::constants::ELLIPSIS;

/// Truncate `text` so its UTF-8 encoding fits in `width` bytes.
///
/// Returns the text unchanged when it already fits both in characters and in
/// bytes. Otherwise the result ends with `...`, unless `width` is too small to
/// hold the marker, in which case the longest whole-character prefix is kept.
pub fn truncate_field(text: &str, width: usize) -> String {
    let char_len = text.chars().count();
    if char_len <= width && text.len() <= width {
        return text.to_owned();
    }

    if width < ELLIPSIS.len() {
        return prefix_within(text, width).to_owned();
    }

    let keep_chars = width - ELLIPSIS.len();
    let by_chars = match text.char_indices().nth(keep_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    };
    let head = prefix_within(by_chars, width - ELLIPSIS.len());

    let mut out = String::with_capacity(head.len() + ELLIPSIS.len());
    out.push_str(head);
    out.push_str(ELLIPSIS);
    out
}

/// Encode `text` into exactly `width` bytes (truncate, then zero-pad).
pub fn encode_field(text: &str, width: usize) -> Vec<u8> {
    let fitted = truncate_field(text, width);
    let mut out = vec![0u8; width];
    out[..fitted.len()].copy_from_slice(fitted.as_bytes());
    out
}

/// Longest prefix of `s` that is at most `max_bytes` long and ends on a char boundary.
fn prefix_within(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_within_backs_off_to_boundary() {
        // "é" is two bytes; cutting at 1 would split it.
        assert_eq!(prefix_within("éa", 1), "");
        assert_eq!(prefix_within("éa", 2), "é");
        assert_eq!(prefix_within("éa", 3), "éa");
    }

    #[test]
    fn tiny_width_has_no_marker() {
        assert_eq!(truncate_field("abcdef", 2), "ab");
        assert_eq!(truncate_field("abcdef", 0), "");
    }
}
