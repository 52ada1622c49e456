use serde::{Deserialize, Serialize};

use crate::HttpError;

/// One field-level problem as shown to API consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Bare field name, without any request location prefix
    pub field: String,
    /// Human-readable explanation
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// The only body shape ever returned for a non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error_code: String,
    pub message: String,
    pub details: Vec<Violation>,
}

impl ErrorEnvelope {
    /// Lower any HTTP error into the envelope, preserving detail order
    pub fn from_error(error: &(impl HttpError + ?Sized)) -> Self {
        Self {
            error_code: error.error_code().to_owned(),
            message: error.client_message(),
            details: error.details(),
        }
    }
}
