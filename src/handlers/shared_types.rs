use crate::domain::{ResponseBuilder, DEFAULT_SUCCESS_CODE};
use crate::infrastructure::AxumJson;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Successful API response: the payload wrapped in the standard envelope.
///
/// Returned directly from handlers. Serializes as
/// `{"success": true, "data": ...}` with the carried status code.
#[derive(Debug)]
pub struct Success<T> {
    pub data: T,
    pub code: u16,
}

impl<T> Success<T> {
    // ---
    /// Envelope `data` with status 200.
    pub fn new(data: T) -> Self {
        Self::with_code(data, DEFAULT_SUCCESS_CODE)
    }

    /// Envelope `data` with status `code`.
    pub fn with_code(data: T, code: u16) -> Self {
        Self { data, code }
    }
}

impl<T> IntoResponse for Success<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        AxumJson
            .success_with_code(self.data, self.code)
            .into_response()
    }
}
