//! Tracing subscriber setup for binaries and tests.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! caller's choice. This helper wires the common console case.

use tracing_subscriber::EnvFilter;

/// Install the global console subscriber.
///
/// Filter comes from `GREENLIGHT_LOG`, then `RUST_LOG`, then `info`.
/// Safe to call repeatedly; only the first call installs.
pub fn init() {
    let filter = EnvFilter::try_from_env("GREENLIGHT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
