// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `VacHeader` by walking the layout table of its version.
//! - Big-endian for every multi-byte integer; duration is the f64 bit pattern.
//! - Validation runs first so an unknown version or key size never reaches disk.

use byteorder::{BigEndian, ByteOrder};

use crate::fields::encode_field;
use crate::headers::layout::FieldId;
use crate::headers::types::{HeaderError, VacHeader};

/// Serialize a `VacHeader` into its fixed-length big-endian form.
///
/// # Returns
/// - `Ok(Vec<u8>)` of exactly `layout.len` bytes.
/// - `Err(HeaderError)` if validation fails (bad magic, version, key size).
pub fn encode_header_be(h: &VacHeader) -> Result<Vec<u8>, HeaderError> {
    h.validate()?;
    let layout = h.format_version()?.layout();

    let mut out = vec![0u8; layout.len];
    let m = &h.metadata;

    for spec in layout.fields {
        let dst = &mut out[spec.range()];
        match spec.id {
            FieldId::Magic      => dst.copy_from_slice(&h.magic),
            FieldId::Version    => BigEndian::write_u32(dst, h.version),
            FieldId::KeySize    => BigEndian::write_u32(dst, h.key_size),
            FieldId::Title      => dst.copy_from_slice(&encode_field(&m.title, spec.len)),
            FieldId::Artist     => dst.copy_from_slice(&encode_field(&m.artist, spec.len)),
            FieldId::Album      => dst.copy_from_slice(&encode_field(&m.album, spec.len)),
            FieldId::Duration   => BigEndian::write_u64(dst, m.duration_seconds.to_bits()),
            FieldId::Bitrate    => BigEndian::write_u32(dst, m.bitrate_kbps),
            FieldId::SampleRate => BigEndian::write_u32(dst, m.sample_rate_hz),
            FieldId::Track      => BigEndian::write_u32(dst, m.track_number),
        }
    }

    debug_assert_eq!(out.len(), layout.len, "encoding wrote incorrect length");
    Ok(out)
}
