//! Prometheus metrics implementation.
//!
//! Concrete `Metrics` backed by the global `metrics` crate registry. The
//! sibling modules do the work: `counters.rs` records, `recorder.rs` owns
//! the global `PrometheusHandle` used for rendering.

use crate::domain::Metrics;

/// Prometheus-based metrics implementation.
///
/// Holds no state; all counters live in the global registry.
#[derive(Default)]
pub struct PrometheusMetrics {}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_envelope(&self, status: u16) {
        tracing::debug!(status, "Recording envelope response");
        super::increment_envelope_sent(status);
    }
}
