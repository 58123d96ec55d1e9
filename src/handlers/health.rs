use super::shared_types::Success;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Responds with the health status of the server.
///
/// # Responses
/// - `200 OK` with `{"success": true, "data": {"status": "ok", "version": "..."}}`
pub async fn health_check() -> Success<HealthResponse> {
    // ---
    Success::new(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
