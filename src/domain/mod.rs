mod envelope;
mod metrics;
mod response_builder;

// Publicly expose the envelope and the builder seam it is written against
pub use envelope::{envelope, Envelope, DEFAULT_SUCCESS_CODE};
pub use response_builder::{ResponseBuilder, ResponseError};

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};
