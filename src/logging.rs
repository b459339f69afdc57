//! Logging setup.
//!
//! Boostkit emits `tracing` events: `debug` on construction and log mutation,
//! `trace` for each `process` call. Applications that already install a
//! subscriber need nothing from this module.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,boostkit=info,boostkit_primitives=info";

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("boostkit=trace,boostkit_primitives=trace"))
        .with_test_writer()
        .try_init();
}
