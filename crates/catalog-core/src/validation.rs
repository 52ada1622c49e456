use std::fmt;

use http::StatusCode;
use thiserror::Error;

use crate::{HttpError, VALIDATION_ERROR, VALIDATION_MESSAGE, Violation};

/// Field name used when a violation cannot be tied to a specific field
const REQUEST_FIELD: &str = "request";

/// Part of the request a rejected value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
    Query,
}

impl Location {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

/// Location-qualified path to a rejected value
///
/// The location is kept for logs; [`FieldPath::field_name`] drops it so
/// callers only ever see the bare field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    location: Option<Location>,
    segments: Vec<String>,
}

impl FieldPath {
    /// Path pointing at the request as a whole
    pub const fn request(location: Location) -> Self {
        Self {
            location: Some(location),
            segments: Vec::new(),
        }
    }

    pub fn body(field: impl Into<String>) -> Self {
        Self::request(Location::Body).join(field)
    }

    pub fn path(param: impl Into<String>) -> Self {
        Self::request(Location::Path).join(param)
    }

    pub fn query(param: impl Into<String>) -> Self {
        Self::request(Location::Query).join(param)
    }

    /// Append a nested segment (object key or array index)
    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Dotted field name without the location, or `request` when nothing
    /// nameable is left
    pub fn field_name(&self) -> String {
        let name = self
            .segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".");

        if name.is_empty() { REQUEST_FIELD.to_owned() } else { name }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location {
            f.write_str(location.as_str())?;
            if !self.segments.is_empty() {
                f.write_str(".")?;
            }
        }
        f.write_str(&self.segments.join("."))
    }
}

/// One recorded schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: FieldPath,
    pub reason: String,
}

/// Input rejected by a schema, carrying every violation found
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("request validation failed: {}", summary(&self.errors))]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Failure with a single violation
    pub fn single(path: FieldPath, reason: impl Into<String>) -> Self {
        let mut failure = Self::new();
        failure.push(path, reason);
        failure
    }

    pub fn push(&mut self, path: FieldPath, reason: impl Into<String>) {
        self.errors.push(FieldError {
            path,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl HttpError for ValidationFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_code(&self) -> &str {
        VALIDATION_ERROR
    }

    fn client_message(&self) -> String {
        VALIDATION_MESSAGE.to_owned()
    }

    fn details(&self) -> Vec<Violation> {
        self.errors
            .iter()
            .map(|e| Violation::new(e.path.field_name(), e.reason.clone()))
            .collect()
    }
}

impl axum::response::IntoResponse for ValidationFailure {
    fn into_response(self) -> axum::response::Response {
        crate::error_response(&self)
    }
}
