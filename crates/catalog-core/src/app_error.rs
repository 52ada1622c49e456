use std::borrow::Cow;

use http::StatusCode;
use thiserror::Error;

use crate::{HttpError, INTERNAL_ERROR, Violation};

/// Explicit application failure raised by a handler
///
/// Carries its own status, code, message and details; the normalizer
/// copies them into the envelope unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_code} ({status}): {message}")]
pub struct AppError {
    pub status: StatusCode,
    pub error_code: Cow<'static, str>,
    pub message: String,
    pub details: Vec<Violation>,
}

impl AppError {
    pub fn new(status: StatusCode, error_code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Append a `{field, reason}` detail entry
    #[must_use]
    pub fn with_detail(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.details.push(Violation::new(field, reason));
        self
    }

    /// Generic 500 used for defects outside the recognized failure kinds
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR,
            "An internal error occurred.",
        )
    }

    /// Envelope-compatible error derived from a bare status code
    ///
    /// Used when a layer outside the handlers produced an error response
    /// without a body we recognize.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            return Self {
                status,
                ..Self::internal()
            };
        }

        let code = match status {
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::FORBIDDEN => "FORBIDDEN",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::METHOD_NOT_ALLOWED => "METHOD_NOT_ALLOWED",
            StatusCode::REQUEST_TIMEOUT => "REQUEST_TIMEOUT",
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
            StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
            StatusCode::TOO_MANY_REQUESTS => "RATE_LIMITED",
            _ => "CLIENT_ERROR",
        };

        let message = status
            .canonical_reason()
            .map_or_else(|| "Request failed.".to_owned(), |reason| format!("{reason}."));

        Self::new(status, code, message)
    }
}

impl HttpError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_code(&self) -> &str {
        &self.error_code
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }

    fn details(&self) -> Vec<Violation> {
        self.details.clone()
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        crate::error_response(&self)
    }
}
