//! telemetry/mod.rs
//! Counters, stage timers, and immutable snapshots for codec operations.
//!
//! Notes:
//! - Counters are plain values; concurrent callers keep their own and merge.
//! - Snapshots are immutable and serde-serialisable for reporting.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
