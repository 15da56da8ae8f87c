// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Container header and track metadata.
//!
//! Notes:
//! - A header is built once per encode and rebuilt once per decode from file bytes.
//! - Numeric fields are big-endian on the wire; text fields are fixed-width UTF-8.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_TRACK, FIELD_WIDTH, KEY_SIZE, MAGIC_CSNG, SUPPORTED_VERSION, UNKNOWN_FIELD,
};
use crate::fields::{truncate_field, FieldError};
use crate::headers::layout::{FieldId, FormatVersion};
use crate::utils::fmt_bytes;

/// Metadata embedded in every container header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_seconds: f64,
    pub bitrate_kbps: u32,
    pub sample_rate_hz: u32,
    pub track_number: u32,
}

impl Default for TrackMetadata {
    /// Fallback used when tags cannot be read:
    /// - "Unknown" text fields
    /// - zero duration / bitrate / sample rate
    /// - track 1
    fn default() -> Self {
        Self {
            title: UNKNOWN_FIELD.into(),
            artist: UNKNOWN_FIELD.into(),
            album: UNKNOWN_FIELD.into(),
            duration_seconds: 0.0,
            bitrate_kbps: 0,
            sample_rate_hz: 0,
            track_number: DEFAULT_TRACK,
        }
    }
}

impl TrackMetadata {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn with_audio(mut self, bitrate_kbps: u32, sample_rate_hz: u32) -> Self {
        self.bitrate_kbps = bitrate_kbps;
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    pub fn with_track(mut self, track_number: u32) -> Self {
        self.track_number = track_number;
        self
    }

    /// Fill blanks the way the tag reader does: empty text -> "Unknown", track 0 -> 1.
    pub fn normalized(mut self) -> Self {
        for field in [&mut self.title, &mut self.artist, &mut self.album] {
            if field.trim().is_empty() {
                *field = UNKNOWN_FIELD.into();
            }
        }
        if self.track_number == 0 {
            self.track_number = DEFAULT_TRACK;
        }
        self
    }

    /// The metadata as it will read back after a header round trip.
    pub fn fitted(&self) -> Self {
        Self {
            title: truncate_field(&self.title, FIELD_WIDTH),
            artist: truncate_field(&self.artist, FIELD_WIDTH),
            album: truncate_field(&self.album, FIELD_WIDTH),
            ..self.clone()
        }
    }
}

/// Parsed or to-be-written container header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub key_size: u32,
    pub metadata: TrackMetadata,
}

impl Default for VacHeader {
    fn default() -> Self {
        Self::new(TrackMetadata::default())
    }
}

impl VacHeader {
    pub fn new(metadata: TrackMetadata) -> Self {
        Self {
            magic: MAGIC_CSNG,
            version: SUPPORTED_VERSION,
            key_size: KEY_SIZE as u32,
            metadata,
        }
    }

    pub fn format_version(&self) -> Result<FormatVersion, HeaderError> {
        FormatVersion::from_raw(self.version)
    }

    /// Header length for this header's version.
    pub fn encoded_len(&self) -> Result<usize, HeaderError> {
        Ok(self.format_version()?.layout().len)
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_CSNG {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC_CSNG });
        }
        self.format_version()?;
        if self.key_size != KEY_SIZE as u32 {
            return Err(HeaderError::KeySizeMismatch { have: self.key_size, need: KEY_SIZE as u32 });
        }
        Ok(())
    }

    /// Human-readable info block.
    pub fn summary(&self) -> String {
        let m = &self.metadata;
        format!(
            "Vitakrypt Audio Codec (VAC) v{}\n\
             Title: {}\n\
             Artist: {}\n\
             Album: {}\n\
             Track: {}\n\
             Duration: {:.2}s\n\
             Bitrate: {} kbps\n\
             Sample Rate: {} Hz",
            self.version,
            m.title,
            m.artist,
            m.album,
            m.track_number,
            m.duration_seconds,
            m.bitrate_kbps,
            m.sample_rate_hz,
        )
    }
}

impl fmt::Display for VacHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Buffer too short to contain a header.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Invalid magic marker (expected "CSNG").
    #[error("invalid magic: expected {}, got {}", fmt_bytes(.need), fmt_bytes(.have))]
    InvalidMagic { have: [u8; 4], need: [u8; 4] },

    /// Structurally a container, but a version this codec has no layout for.
    #[error("unsupported format version: {have} (supported: {supported})")]
    UnsupportedVersion { have: u32, supported: u32 },

    /// Declared key size differs from the codec's key size.
    #[error("key size mismatch: header declares {have}, codec uses {need}")]
    KeySizeMismatch { have: u32, need: u32 },

    /// A text field could not be decoded.
    #[error("malformed {field} field: {source}")]
    Field { field: FieldId, source: FieldError },
}
