//! Error taxonomy and wire envelope shared by every catalog crate
//!
//! Domain crates describe their failures through [`HttpError`]; the only code
//! that turns a failure into a response body is [`error_response`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod api_error;
mod app_error;
mod envelope;
mod error;
mod normalize;
mod validation;

pub use api_error::ApiError;
pub use app_error::AppError;
pub use envelope::{ErrorEnvelope, Violation};
pub use error::{HttpError, INTERNAL_ERROR, VALIDATION_ERROR, VALIDATION_MESSAGE};
pub use normalize::{error_response, internal_error_response};
pub use validation::{FieldError, FieldPath, Location, ValidationFailure};
