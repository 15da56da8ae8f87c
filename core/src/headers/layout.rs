// ## 📂 File: `src/headers/layout.rs`

//! headers/layout.rs
//! Per-version header layouts.
//!
//! Each format version owns a fixed field table (id, offset, length). Encoding
//! and decoding walk the table of the version being handled, so a new version
//! is a new table rather than a new struct.
//!
//! All versions share the 12-byte preamble: magic, version, key size.

use std::fmt;
use std::ops::Range;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_WIDTH, SUPPORTED_VERSION};
use crate::headers::types::HeaderError;

/// Fixed header size of format v1 in bytes.
pub const HEADER_LEN_V1: usize = 224;

/// Header length every container must at least have.
pub const HEADER_LEN: usize = HEADER_LEN_V1;

/// Magic (4) + version (4) + key size (4).
pub const PREAMBLE_LEN: usize = 12;
pub const MAGIC_RANGE: Range<usize> = 0..4;
pub const VERSION_RANGE: Range<usize> = 4..8;

/// Format versions this crate knows a layout for.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum FormatVersion {
    V1 = 1,
}

impl FormatVersion {
    /// Resolve a raw version field. Values without a layout are rejected.
    pub fn from_raw(raw: u32) -> Result<Self, HeaderError> {
        Self::try_from_primitive(raw)
            .map_err(|_| HeaderError::UnsupportedVersion { have: raw, supported: SUPPORTED_VERSION })
    }

    pub const fn layout(self) -> HeaderLayout {
        match self {
            FormatVersion::V1 => HeaderLayout { version: self, fields: &LAYOUT_V1, len: HEADER_LEN_V1 },
        }
    }
}

/// Semantic identity of a header field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Magic,
    Version,
    KeySize,
    Title,
    Artist,
    Album,
    Duration,
    Bitrate,
    SampleRate,
    Track,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldId::Magic      => "magic",
            FieldId::Version    => "format_version",
            FieldId::KeySize    => "key_size",
            FieldId::Title      => "title",
            FieldId::Artist     => "artist",
            FieldId::Album      => "album",
            FieldId::Duration   => "duration_seconds",
            FieldId::Bitrate    => "bitrate_kbps",
            FieldId::SampleRate => "sample_rate_hz",
            FieldId::Track      => "track_number",
        };
        f.write_str(name)
    }
}

/// One entry of a layout table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub offset: usize,
    pub len: usize,
}

impl FieldSpec {
    pub const fn new(id: FieldId, offset: usize, len: usize) -> Self {
        Self { id, offset, len }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// v1 layout, big-endian throughout.
pub const LAYOUT_V1: [FieldSpec; 10] = [
    FieldSpec::new(FieldId::Magic,        0, 4),   // 0..4     "CSNG"
    FieldSpec::new(FieldId::Version,      4, 4),   // 4..8     u32
    FieldSpec::new(FieldId::KeySize,      8, 4),   // 8..12    u32
    FieldSpec::new(FieldId::Title,       12, FIELD_WIDTH),  // 12..76
    FieldSpec::new(FieldId::Artist,      76, FIELD_WIDTH),  // 76..140
    FieldSpec::new(FieldId::Album,      140, FIELD_WIDTH),  // 140..204
    FieldSpec::new(FieldId::Duration,   204, 8),   // 204..212 f64 bits
    FieldSpec::new(FieldId::Bitrate,    212, 4),   // 212..216 u32
    FieldSpec::new(FieldId::SampleRate, 216, 4),   // 216..220 u32
    FieldSpec::new(FieldId::Track,      220, 4),   // 220..224 u32
];

const _: () = assert!(FormatVersion::V1.layout().is_contiguous());
const _: () = assert!(LAYOUT_V1[2].end() == PREAMBLE_LEN);
const _: () = assert!(SUPPORTED_VERSION == FormatVersion::V1 as u32);

/// Resolved layout for one version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    pub version: FormatVersion,
    pub fields: &'static [FieldSpec],
    pub len: usize,
}

impl HeaderLayout {
    pub fn field(&self, id: FieldId) -> Option<FieldSpec> {
        self.fields.iter().copied().find(|f| f.id == id)
    }

    /// True when fields tile `0..len` without gaps or overlap.
    pub const fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].offset != cursor {
                return false;
            }
            cursor = self.fields[i].end();
            i += 1;
        }
        cursor == self.len
    }
}
