mod axum_json;
pub mod metrics;

// Re-export the factory functions and the axum builder for easy access
pub use axum_json::AxumJson;
pub use metrics::{create_noop_metrics, create_prom_metrics};
