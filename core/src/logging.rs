//! logging.rs
//! tracing subscriber setup for binaries and tests embedding the codec.
//!
//! The library itself only emits events; it never installs a subscriber on its own.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "vac_core=info";

/// Install a fmt subscriber. Safe to call more than once; later calls are no-ops.
///
/// `RUST_LOG` wins over `filter` when set.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
