//! codec: VAC container build/parse plus the file-level facade.
//!
//! Layers, bottom up:
//! - `container`: pure byte-slice operations (`build`, `parse_info`, `parse_and_decrypt`).
//! - `io`: input/output normalisation and the playback sink.
//! - `core`: file-level calls returning telemetry.

pub mod config;
pub mod container;
pub mod io;
pub mod core;

pub use config::CodecConfig;

pub use container::{
    build,
    build_with_key,
    parse_and_decrypt,
    parse_info,
    parse_with_key,
    split_container,
    ParsedContainer,
};

pub use io::{
    InputSource,
    OutputSink,
    PlaybackSink,
    WriterSink,
};

pub use self::core::{
    decode_file,
    encode_file,
    inspect_file,
    play_file,
};
