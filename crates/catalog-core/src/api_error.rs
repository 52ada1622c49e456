use http::StatusCode;
use thiserror::Error;

use crate::{AppError, HttpError, ValidationFailure, Violation};

/// Every way a request handler can fail
///
/// `Validation` and `App` are the recognized failure kinds. `Internal`
/// is a defect: it is logged in full and surfaces as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::App(e) => e.status_code(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::App(e) => e.error_code(),
            Self::Internal(_) => crate::INTERNAL_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(e) => e.client_message(),
            Self::App(e) => e.client_message(),
            Self::Internal(_) => AppError::internal().message,
        }
    }

    fn details(&self) -> Vec<Violation> {
        match self {
            Self::Validation(e) => e.details(),
            Self::App(e) => e.details(),
            Self::Internal(_) => Vec::new(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        crate::error_response(&self)
    }
}
