//! Axum implementation of the [`ResponseBuilder`] seam.
//!
//! This is the host-framework side of the envelope helper: it owns JSON
//! serialization, status conversion and the `Content-Type` header. The
//! envelope itself is built by the provided trait methods.

use crate::domain::{ResponseBuilder, ResponseError};
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Builds `application/json` axum responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumJson;

impl ResponseBuilder for AxumJson {
    // ---
    type Response = Response;

    fn json<B>(&self, body: &B, code: u16) -> Result<Response, ResponseError>
    where
        B: Serialize + ?Sized,
    {
        // ---
        let bytes = serde_json::to_vec(body)?;
        let status = StatusCode::from_u16(code).map_err(|_| ResponseError::InvalidStatus(code))?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(response)
    }
}

/// Global error path for response construction failures.
///
/// Mirrors what `axum::Json` does when serialization fails: 500 with a
/// plain-text reason.
impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        // ---
        tracing::error!("Failed to build response: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
