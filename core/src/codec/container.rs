// ## 📂 File: `src/codec/container.rs`

//! src/codec/container.rs
//! Byte-level container build and parse.
//!
//! Layout: `header || nonce || ciphertext || tag`. The sealed region has no
//! length prefix; it runs from the end of the header to the end of the buffer.

use tracing::{debug, warn};

use crate::crypto::{derive_key, open, seal, VacKey};
use crate::headers::{decode_header_be, encode_header_be, TrackMetadata, VacHeader};
use crate::telemetry::{Stage, TelemetryTimer};
use crate::types::VacError;

/// Result of a successful `parse_and_decrypt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContainer {
    pub header: VacHeader,
    pub payload: Vec<u8>,
}

impl ParsedContainer {
    pub fn metadata(&self) -> &TrackMetadata {
        &self.header.metadata
    }

    pub fn into_parts(self) -> (TrackMetadata, Vec<u8>) {
        (self.header.metadata, self.payload)
    }
}

/// Sizes recorded by the timed build/parse paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContainerSizes {
    pub header_len: usize,
    pub payload_len: usize,
    pub sealed_len: usize,
}

/// Build a complete container from raw audio bytes.
///
/// The whole container is assembled in memory; nothing is written anywhere.
pub fn build(payload: &[u8], passphrase: &str, metadata: &TrackMetadata) -> Result<Vec<u8>, VacError> {
    let mut timer = TelemetryTimer::new();
    build_timed(payload, passphrase, metadata, &mut timer).map(|(bytes, _)| bytes)
}

/// Build with an already-derived key.
pub fn build_with_key(payload: &[u8], key: &VacKey, metadata: &TrackMetadata) -> Result<Vec<u8>, VacError> {
    let header = encode_header_be(&VacHeader::new(metadata.clone()))?;
    let sealed = seal(payload, key)?;
    Ok(concat(&header, &sealed))
}

/// Decode the header only. Never derives a key or touches the sealed region.
pub fn parse_info(container: &[u8]) -> Result<VacHeader, VacError> {
    decode_header_be(container).map_err(|e| {
        warn!(error = %e, len = container.len(), "rejected container header");
        VacError::from(e)
    })
}

/// Decode the header, derive the key, and open the payload.
///
/// # Errors
/// - `Format` / `UnsupportedVersion` from the header checks.
/// - `Authentication` for a wrong passphrase or any damage to the sealed region.
pub fn parse_and_decrypt(container: &[u8], passphrase: &str) -> Result<ParsedContainer, VacError> {
    let mut timer = TelemetryTimer::new();
    parse_timed(container, passphrase, &mut timer).map(|(parsed, _)| parsed)
}

/// Parse with an already-derived key.
pub fn parse_with_key(container: &[u8], key: &VacKey) -> Result<ParsedContainer, VacError> {
    let (header, sealed) = split_container(container)?;
    let payload = open(sealed, key)?;
    Ok(ParsedContainer { header, payload })
}

/// Split a container into its decoded header and the sealed region.
pub fn split_container(container: &[u8]) -> Result<(VacHeader, &[u8]), VacError> {
    let header = parse_info(container)?;
    let header_len = header.encoded_len()?;
    Ok((header, &container[header_len..]))
}

pub(crate) fn build_timed(
    payload: &[u8],
    passphrase: &str,
    metadata: &TrackMetadata,
    timer: &mut TelemetryTimer,
) -> Result<(Vec<u8>, ContainerSizes), VacError> {
    let key = timer.time(Stage::DeriveKey, || derive_key(passphrase));
    let header = timer.time(Stage::EncodeHeader, || encode_header_be(&VacHeader::new(metadata.clone())))?;
    let sealed = timer.time(Stage::Encrypt, || seal(payload, &key))?;

    let sizes = ContainerSizes {
        header_len: header.len(),
        payload_len: payload.len(),
        sealed_len: sealed.len(),
    };
    debug!(header_len = sizes.header_len, sealed_len = sizes.sealed_len, "built container");
    Ok((concat(&header, &sealed), sizes))
}

pub(crate) fn parse_timed(
    container: &[u8],
    passphrase: &str,
    timer: &mut TelemetryTimer,
) -> Result<(ParsedContainer, ContainerSizes), VacError> {
    let (header, sealed) = timer.time(Stage::DecodeHeader, || split_container(container))?;
    let key = timer.time(Stage::DeriveKey, || derive_key(passphrase));

    let payload = timer.time(Stage::Decrypt, || open(sealed, &key)).map_err(|e| {
        warn!(sealed_len = sealed.len(), "container payload failed authentication");
        VacError::from(e)
    })?;

    let sizes = ContainerSizes {
        header_len: container.len() - sealed.len(),
        payload_len: payload.len(),
        sealed_len: sealed.len(),
    };
    Ok((ParsedContainer { header, payload }, sizes))
}

fn concat(header: &[u8], sealed: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len() + sealed.len());
    out.extend_from_slice(header);
    out.extend_from_slice(sealed);
    out
}
