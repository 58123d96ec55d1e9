//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The state is cheaply cloneable
//! (`Arc` internally) so each request gets its own copy.

use crate::domain::MetricsPtr;
use crate::infrastructure::AxumJson;

/// Shared application state passed to all Axum handlers.
///
/// Built once in `create_router()`, attached with `.with_state(...)` and
/// never mutated afterwards.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation (Prometheus or no-op).
    metrics: MetricsPtr,

    /// Response builder handlers use to emit success envelopes.
    responses: AxumJson,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr) -> Self {
        // ---
        AppState {
            metrics,
            responses: AxumJson,
        }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get the response builder.
    pub(crate) fn responses(&self) -> &AxumJson {
        // ---
        &self.responses
    }
}
