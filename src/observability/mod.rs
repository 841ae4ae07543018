//! Observability subsystem: structured logging and provider metrics.

pub mod logging;
pub mod metrics;
