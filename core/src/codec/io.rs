// ## 📂 File: `src/codec/io.rs`
// ## Normalized I/O + all-or-nothing container writer

use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::headers::{TrackMetadata, HEADER_LEN};
use crate::types::VacError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    /// Keep the bytes; they come back in the telemetry snapshot.
    Memory,
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, VacError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Read an entire input into memory, refusing anything over `limit` bytes.
pub fn read_all(src: InputSource, limit: u64) -> Result<Vec<u8>, VacError> {
    if let InputSource::Memory(b) = src {
        if b.len() as u64 > limit {
            return Err(too_large(limit));
        }
        return Ok(b);
    }

    let mut buf = Vec::new();
    open_input(src)?.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(too_large(limit));
    }
    Ok(buf)
}

/// Read at most one header's worth of bytes. Short inputs come back short.
pub fn read_header_bytes(src: InputSource) -> Result<Vec<u8>, VacError> {
    let mut buf = Vec::with_capacity(HEADER_LEN);
    open_input(src)?.take(HEADER_LEN as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Write `buf` in one piece.
///
/// - `File`: written to a temp file beside the target, then renamed over it, so a
///   failure never leaves a partial container behind.
/// - `Writer`: `write_all` + flush.
/// - `Memory`: returns the bytes.
pub fn write_all_or_nothing(sink: OutputSink, buf: &[u8]) -> Result<Option<Vec<u8>>, VacError> {
    match sink {
        OutputSink::Writer(mut w) => {
            w.write_all(buf)?;
            w.flush()?;
            Ok(None)
        }
        OutputSink::File(path) => {
            persist_atomically(&path, buf)?;
            Ok(None)
        }
        OutputSink::Memory => Ok(Some(buf.to_vec())),
    }
}

fn persist_atomically(path: &Path, buf: &[u8]) -> Result<(), VacError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(buf)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| VacError::Io(e.error))?;
    Ok(())
}

fn too_large(limit: u64) -> VacError {
    VacError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("input exceeds {limit} bytes"),
    ))
}

/// Receives decrypted audio as an opaque byte stream.
pub trait PlaybackSink {
    fn play(&mut self, audio: &mut dyn Read, metadata: &TrackMetadata) -> io::Result<()>;
}

/// Playback sink that copies the audio into any writer (pipe, file, buffer).
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> PlaybackSink for WriterSink<W> {
    fn play(&mut self, audio: &mut dyn Read, _metadata: &TrackMetadata) -> io::Result<()> {
        io::copy(audio, &mut self.inner)?;
        self.inner.flush()
    }
}
