use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::{AppError, ErrorEnvelope, HttpError};

/// Translate a failure into the standard error envelope response
///
/// This is the single formatting path for error bodies. It performs no
/// business logic: status, code, message and details are taken from the
/// error as-is, in order.
pub fn error_response(error: &dyn HttpError) -> Response {
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!(%status, error = %error, "request failed");
    } else {
        tracing::debug!(%status, error = %error, "request rejected");
    }

    (status, Json(ErrorEnvelope::from_error(error))).into_response()
}

/// Generic 500 envelope for defects
pub fn internal_error_response() -> Response {
    error_response(&AppError::internal())
}
