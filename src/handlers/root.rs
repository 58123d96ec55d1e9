use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Envelope API 👋
Version: {version}

Available endpoints:
  - POST /echo            - Echo the JSON body back inside a success envelope
  - POST /echo?code=201   - Same, with an explicit HTTP status code
  - GET  /health          - Health check (enveloped)
  - GET  /metrics         - Metrics in Prometheus text format

Every successful JSON response has the shape {{"success": true, "data": ...}}.
"#
    )
}
