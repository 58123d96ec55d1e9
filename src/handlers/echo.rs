use crate::app_state::AppState;
use crate::domain::{ResponseBuilder, ResponseError, DEFAULT_SUCCESS_CODE};
use axum::{
    extract::{Query, State},
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct EchoQuery {
    code: Option<u16>,
}

/// Handler for echoing a JSON payload (POST /echo).
///
/// Wraps the request body, unchanged, as the `data` of a success envelope.
///
/// - `code` query parameter selects the response status; defaults to `200 OK`.
/// - Codes the HTTP layer cannot represent yield `500 Internal Server Error`.
/// - Malformed JSON bodies are rejected by the `Json` extractor before this runs.
#[tracing::instrument(skip(state, payload))]
pub async fn echo_payload(
    State(state): State<AppState>,
    Query(params): Query<EchoQuery>,
    Json(payload): Json<Value>,
) -> Result<Response, ResponseError> {
    // ---
    let code = params.code.unwrap_or(DEFAULT_SUCCESS_CODE);
    let response = state.responses().success_with_code(payload, code)?;

    state.metrics().record_envelope(code);
    Ok(response)
}
