//! vac-core
//!
//! VAC audio container codec: fixed big-endian header with track metadata,
//! followed by an AES-256-GCM sealed payload keyed by a passphrase.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod logging;

// Leaves
pub mod fields;
pub mod crypto;

// Container
pub mod headers;
pub mod codec;
pub mod telemetry;

pub use types::{Result, VacError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{
        build, decode_file, encode_file, inspect_file, parse_and_decrypt, parse_info, play_file,
        CodecConfig, InputSource, OutputSink, ParsedContainer, PlaybackSink, WriterSink,
    };
    pub use crate::headers::{TrackMetadata, VacHeader};
    pub use crate::types::VacError;
}
