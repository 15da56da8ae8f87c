// ## `core.rs`: stable file-level API

use std::io::Cursor;

use tracing::info;

use crate::codec::config::CodecConfig;
use crate::codec::container::{build_timed, parse_info, parse_timed};
use crate::codec::io::{read_all, read_header_bytes, write_all_or_nothing, InputSource, OutputSink, PlaybackSink};
use crate::headers::{TrackMetadata, VacHeader};
use crate::telemetry::{CodecCounters, Stage, TelemetrySnapshot, TelemetryTimer};
use crate::types::VacError;
use crate::utils::fmt_size;

/// Encode raw audio into a container.
///
/// The full container is built in memory before the first byte reaches `output`.
pub fn encode_file(
    input: InputSource,
    output: OutputSink,
    metadata: &TrackMetadata,
    config: &CodecConfig,
) -> Result<TelemetrySnapshot, VacError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();

    let payload = timer.time(Stage::Read, || read_all(input, config.max_container_len))?;
    let (container, sizes) = build_timed(&payload, &config.passphrase, metadata, &mut timer)?;
    let captured = timer.time(Stage::Write, || write_all_or_nothing(output, &container))?;

    let mut counters = CodecCounters::default();
    counters.add_build(sizes.header_len, sizes.payload_len, sizes.sealed_len);
    timer.finish();

    info!(
        title = %metadata.title,
        payload = %fmt_size(sizes.payload_len as u64),
        container_len = container.len(),
        "encoded container"
    );

    let mut snapshot = TelemetrySnapshot::from(&counters, &timer);
    if let Some(buf) = captured {
        snapshot.attach_output(buf);
    }
    Ok(snapshot)
}

/// Read and decode only the header of a container.
pub fn inspect_file(input: InputSource) -> Result<VacHeader, VacError> {
    let head = read_header_bytes(input)?;
    parse_info(&head)
}

/// Decrypt a container and write the recovered audio to `output`.
pub fn decode_file(
    input: InputSource,
    output: OutputSink,
    config: &CodecConfig,
) -> Result<(VacHeader, TelemetrySnapshot), VacError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();

    let container = timer.time(Stage::Read, || read_all(input, config.max_container_len))?;
    let (parsed, sizes) = parse_timed(&container, &config.passphrase, &mut timer)?;
    let captured = timer.time(Stage::Write, || write_all_or_nothing(output, &parsed.payload))?;

    let mut counters = CodecCounters::default();
    counters.add_parse(sizes.header_len, sizes.payload_len, sizes.sealed_len);
    timer.finish();

    info!(
        title = %parsed.header.metadata.title,
        payload = %fmt_size(sizes.payload_len as u64),
        "decoded container"
    );

    let mut snapshot = TelemetrySnapshot::from(&counters, &timer);
    if let Some(buf) = captured {
        snapshot.attach_output(buf);
    }
    Ok((parsed.header, snapshot))
}

/// Decrypt a container and hand the audio to a playback sink.
///
/// Nothing reaches the sink unless the payload authenticated.
pub fn play_file(
    input: InputSource,
    config: &CodecConfig,
    sink: &mut dyn PlaybackSink,
) -> Result<VacHeader, VacError> {
    config.validate()?;
    let container = read_all(input, config.max_container_len)?;

    let mut timer = TelemetryTimer::new();
    let (parsed, _) = parse_timed(&container, &config.passphrase, &mut timer)?;

    info!(
        title = %parsed.header.metadata.title,
        artist = %parsed.header.metadata.artist,
        album = %parsed.header.metadata.album,
        "playing"
    );
    sink.play(&mut Cursor::new(parsed.payload.as_slice()), &parsed.header.metadata)?;
    Ok(parsed.header)
}
