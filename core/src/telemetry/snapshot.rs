// ## src/telemetry/snapshot.rs

//! src/telemetry/snapshot.rs
//!
//! Immutable telemetry snapshot returned by the file-level codec operations.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Captures counters, overhead ratio, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: CodecCounters,
    /// Envelope + header bytes per payload byte.
    pub overhead_ratio: f64,
    pub throughput_payload_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    /// Output bytes, present only when buffer capture was requested.
    #[serde(skip)]
    pub output: Option<Vec<u8>>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &CodecCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let overhead_ratio = if counters.bytes_payload > 0 {
            (counters.bytes_header + counters.bytes_overhead) as f64 / counters.bytes_payload as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            overhead_ratio,
            throughput_payload_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
            output: None,
        }
    }

    pub fn attach_output(&mut self, buf: Vec<u8>) {
        self.output = Some(buf);
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - sealed bytes cover the payload plus envelope overhead
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        self.counters.bytes_sealed >= self.counters.bytes_payload
            && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
