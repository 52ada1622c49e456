//! Application errors raised by the item endpoints

use catalog_core::AppError;
use http::StatusCode;

pub const ITEM_NOT_FOUND: &str = "ITEM_NOT_FOUND";
pub const UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTED_MEDIA_TYPE";
pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
pub const BAD_REQUEST: &str = "BAD_REQUEST";

/// Lookup of an id that is not in the store
pub fn item_not_found(id: i128) -> AppError {
    AppError::new(StatusCode::NOT_FOUND, ITEM_NOT_FOUND, "Item not found.")
        .with_detail("item_id", format!("{id} does not exist"))
}

pub fn unsupported_media_type() -> AppError {
    AppError::new(
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        UNSUPPORTED_MEDIA_TYPE,
        "Request body must be JSON.",
    )
    .with_detail("request", "expected 'Content-Type: application/json'")
}

pub fn payload_too_large(limit: usize) -> AppError {
    AppError::new(
        StatusCode::PAYLOAD_TOO_LARGE,
        PAYLOAD_TOO_LARGE,
        "Request body is too large.",
    )
    .with_detail("request", format!("limit is {limit} bytes"))
}

pub fn unreadable_body(error: &axum::Error) -> AppError {
    AppError::new(StatusCode::BAD_REQUEST, BAD_REQUEST, "Failed to read request body.")
        .with_detail("request", error.to_string())
}
