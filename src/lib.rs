// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use handlers::{echo_payload, health_check, metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

// Hoist up only the public symbol(s)
pub use domain::{envelope, Envelope, ResponseBuilder, ResponseError, DEFAULT_SUCCESS_CODE};
pub use handlers::Success;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
    AxumJson,
};

/// Build the HTTP router with configuration read from environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    create_router_with_config(&config)
}

/// Build the HTTP router from an already loaded configuration.
pub fn create_router_with_config(config: &AppConfig) -> Result<Router> {
    // ---
    let metrics = match config.metrics.kind {
        MetricsKind::Prometheus => create_prom_metrics()?,
        MetricsKind::Noop => create_noop_metrics()?,
    };

    let app_state = AppState::new(metrics);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/echo", post(echo_payload))
        .with_state(app_state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn test_config(kind: MetricsKind) -> AppConfig {
        // ---
        AppConfig {
            server: ServerConfig {
                bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            },
            metrics: MetricsConfig { kind },
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        // ---
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        // ---
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn echo_wraps_body_with_default_status() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Noop)).unwrap();

        let response = app
            .oneshot(post_json("/echo", r#"{"id":1,"name":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            read_json(response).await,
            json!({ "success": true, "data": { "id": 1, "name": "x" } })
        );
    }

    #[tokio::test]
    async fn echo_honors_status_code() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Noop)).unwrap();

        let response = app.oneshot(post_json("/echo?code=201", "42")).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await, json!({ "success": true, "data": 42 }));
    }

    #[tokio::test]
    async fn echo_null_payload() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Noop)).unwrap();

        let response = app.oneshot(post_json("/echo", "null")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "success": true, "data": null }));
    }

    #[tokio::test]
    async fn echo_unrepresentable_code_is_server_error() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Noop)).unwrap();

        let response = app.oneshot(post_json("/echo?code=42", "1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_is_enveloped() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Noop)).unwrap();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["status"], json!("ok"));
        assert_eq!(body["data"]["version"], json!(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn prometheus_counts_echo_responses() {
        // ---
        let app = create_router_with_config(&test_config(MetricsKind::Prometheus)).unwrap();

        let response = app
            .clone()
            .oneshot(post_json("/echo?code=202", r#"["a"]"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = app
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("envelope_responses_total"), "metrics: {text}");
        assert!(text.contains(r#"status="202""#), "metrics: {text}");
    }
}
