// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Byte counters for codec operations.
//!
//! Summary: Collects header, payload and envelope byte counts during build/parse.
//! Converted into an immutable TelemetrySnapshot at the end of each operation.
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Deterministic counters collected while building or parsing containers.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub files: u64,
    pub bytes_header: u64,
    pub bytes_payload: u64,
    pub bytes_sealed: u64,
    pub bytes_overhead: u64,
}

impl CodecCounters {
    /// Record one built container.
    ///
    /// - `header_len`: encoded header bytes
    /// - `payload_len`: plaintext audio bytes
    /// - `sealed_len`: full envelope (nonce + ciphertext + tag)
    pub fn add_build(&mut self, header_len: usize, payload_len: usize, sealed_len: usize) {
        self.record(header_len, payload_len, sealed_len);
    }

    /// Record one parsed and decrypted container.
    pub fn add_parse(&mut self, header_len: usize, payload_len: usize, sealed_len: usize) {
        self.record(header_len, payload_len, sealed_len);
    }

    fn record(&mut self, header_len: usize, payload_len: usize, sealed_len: usize) {
        self.files += 1;
        self.bytes_header += header_len as u64;
        self.bytes_payload += payload_len as u64;
        self.bytes_sealed += sealed_len as u64;
        self.bytes_overhead += sealed_len.saturating_sub(payload_len) as u64;
    }

    /// Total container bytes (header + sealed payload).
    pub fn container_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_sealed
    }

    // No locks or atomics: each worker keeps its own counters and merges at the end.
    pub fn merge(&mut self, other: &CodecCounters) {
        self.files += other.files;
        self.bytes_header += other.bytes_header;
        self.bytes_payload += other.bytes_payload;
        self.bytes_sealed += other.bytes_sealed;
        self.bytes_overhead += other.bytes_overhead;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
