// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Check order is fixed: length, magic, version, key size, then fields.
//! - The version field picks the layout before any later byte is interpreted.
//! - Only the header region is read; trailing payload bytes are ignored here.

use byteorder::{BigEndian, ByteOrder};
use tracing::debug;

use crate::constants::{KEY_SIZE, MAGIC_CSNG};
use crate::fields::decode_field;
use crate::headers::layout::{FieldId, FieldSpec, FormatVersion, HEADER_LEN, MAGIC_RANGE, VERSION_RANGE};
use crate::headers::types::{HeaderError, TrackMetadata, VacHeader};

/// Deserialize a big-endian header from the front of `buf`.
///
/// # Returns
/// - `Ok(VacHeader)` if every check passes.
/// - `Err(HeaderError)`:
///   - `BufferTooShort` when `buf` is shorter than the fixed header length,
///   - `InvalidMagic`, `UnsupportedVersion`, `KeySizeMismatch`,
///   - `Field` when a text field is not valid UTF-8.
pub fn decode_header_be(buf: &[u8]) -> Result<VacHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[MAGIC_RANGE]);
    if magic != MAGIC_CSNG {
        return Err(HeaderError::InvalidMagic { have: magic, need: MAGIC_CSNG });
    }

    let raw_version = BigEndian::read_u32(&buf[VERSION_RANGE]);
    let layout = FormatVersion::from_raw(raw_version)?.layout();
    if buf.len() < layout.len {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: layout.len });
    }

    let mut h = VacHeader {
        magic,
        version: raw_version,
        key_size: 0,
        metadata: TrackMetadata::default(),
    };

    // Field order follows the layout table; key size precedes all text fields.
    for spec in layout.fields {
        let src = &buf[spec.range()];
        let m = &mut h.metadata;
        match spec.id {
            FieldId::Magic | FieldId::Version => {}
            FieldId::KeySize => {
                let have = BigEndian::read_u32(src);
                if have != KEY_SIZE as u32 {
                    return Err(HeaderError::KeySizeMismatch { have, need: KEY_SIZE as u32 });
                }
                h.key_size = have;
            }
            FieldId::Title      => m.title = text(spec, src)?,
            FieldId::Artist     => m.artist = text(spec, src)?,
            FieldId::Album      => m.album = text(spec, src)?,
            FieldId::Duration   => m.duration_seconds = f64::from_bits(BigEndian::read_u64(src)),
            FieldId::Bitrate    => m.bitrate_kbps = BigEndian::read_u32(src),
            FieldId::SampleRate => m.sample_rate_hz = BigEndian::read_u32(src),
            FieldId::Track      => m.track_number = BigEndian::read_u32(src),
        }
    }

    debug!(version = raw_version, title = %h.metadata.title, "decoded container header");
    Ok(h)
}

#[inline]
fn text(spec: &FieldSpec, src: &[u8]) -> Result<String, HeaderError> {
    decode_field(src).map_err(|source| HeaderError::Field { field: spec.id, source })
}
