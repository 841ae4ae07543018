//! Structured logging.
//!
//! The crate itself only emits `tracing` events; installing a subscriber
//! is the host application's choice. This helper covers the common case.

use tracing_subscriber::EnvFilter;

/// Install a stdout subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; only the first call installs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
