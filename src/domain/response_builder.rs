use super::envelope::{Envelope, DEFAULT_SUCCESS_CODE};
use serde::Serialize;

/// Failure while turning a body into an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    // ---
    /// The JSON serializer rejected the body. The original error is kept as-is.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The response layer cannot represent this status code.
    #[error("invalid HTTP status code: {0}")]
    InvalidStatus(u16),
}

/// Abstraction over the host framework's "build JSON response" primitive.
///
/// Implementors serialize `body` and attach the status `code`. The envelope
/// helpers are provided methods, so every backend gets identical envelopes.
pub trait ResponseBuilder {
    // ---
    type Response;

    /// Build a JSON response from `body` with status `code`.
    fn json<B>(&self, body: &B, code: u16) -> Result<Self::Response, ResponseError>
    where
        B: Serialize + ?Sized;

    /// Wrap `data` in a success envelope with status 200.
    fn success<T>(&self, data: T) -> Result<Self::Response, ResponseError>
    where
        T: Serialize,
    {
        self.success_with_code(data, DEFAULT_SUCCESS_CODE)
    }

    /// Wrap `data` in a success envelope with status `code`.
    ///
    /// `code` is handed to [`ResponseBuilder::json`] untouched.
    fn success_with_code<T>(&self, data: T, code: u16) -> Result<Self::Response, ResponseError>
    where
        T: Serialize,
    {
        self.json(&Envelope::success(data), code)
    }
}
