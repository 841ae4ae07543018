//! Provider metrics.
//!
//! # Metrics
//! - `swapnet_provider_requests_total` (counter): requests by provider and
//!   outcome
//! - `swapnet_provider_health` (gauge): 1 = last request succeeded,
//!   0 = failed
//!
//! No exporter is bundled; the host application installs its own
//! `metrics` recorder.

use metrics::{counter, gauge};

/// Record the outcome of one provider request.
pub fn record_provider_health(provider: &'static str, healthy: bool) {
    let outcome = if healthy { "ok" } else { "error" };
    counter!(
        "swapnet_provider_requests_total",
        "provider" => provider,
        "outcome" => outcome
    )
    .increment(1);
    gauge!("swapnet_provider_health", "provider" => provider).set(if healthy { 1.0 } else { 0.0 });
}
