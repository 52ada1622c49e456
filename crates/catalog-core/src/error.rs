use http::StatusCode;

use crate::Violation;

/// Error code for every schema violation
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Error code for failures that are not a recognized failure kind
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Message attached to every validation envelope
pub const VALIDATION_MESSAGE: &str = "Fix the highlighted fields and try again.";

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The boundary adapter
/// [`crate::error_response`] turns these into the error envelope, keeping
/// domain errors free of response formatting.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error code (e.g. `ITEM_NOT_FOUND`)
    fn error_code(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Field-level details, in the order they were recorded
    fn details(&self) -> Vec<Violation> {
        Vec::new()
    }
}
