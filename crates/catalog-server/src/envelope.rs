//! Server-level failure paths that must still produce the error envelope
//!
//! Unknown routes, unsupported methods, panics, and any error response a
//! layer emitted without an envelope body all end up in
//! [`catalog_core::error_response`].

use std::any::Any;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use catalog_core::AppError;
use http::{HeaderValue, Method, StatusCode, Uri, header};

pub const ROUTE_NOT_FOUND: &str = "ROUTE_NOT_FOUND";
pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";

static APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Fallback for paths that match no route
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND, "Route not found.")
        .with_detail("request", format!("no route for {}", uri.path()))
}

/// Fallback for known paths requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        METHOD_NOT_ALLOWED,
        "Method not allowed.",
    )
    .with_detail("request", format!("{method} is not supported for {}", uri.path()))
}

/// Panic handler for `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned());

    tracing::error!(panic = %message, "handler panicked");

    catalog_core::internal_error_response()
}

/// Rewrite any non-envelope error response into the envelope
///
/// Handlers and fallbacks already emit envelopes; this catches responses
/// produced by layers or extractors outside our control.
pub async fn envelope_guard(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    tracing::warn!(%method, %path, %status, "replacing non-envelope error body");

    let (mut parts, _) = response.into_parts();
    let (envelope_parts, body) = AppError::from_status(status).into_response().into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    if let Some(content_type) = envelope_parts.headers.get(header::CONTENT_TYPE) {
        parts.headers.insert(header::CONTENT_TYPE, content_type.clone());
    }

    Response::from_parts(parts, body)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value == APPLICATION_JSON)
}
