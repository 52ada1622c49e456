use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use catalog_core::{ApiError, FieldPath, Location, ValidationFailure};
use http::request::Parts;

use crate::{errors, schema, types::NewItem};

/// Body limit for item requests (1 MiB)
pub const BODY_LIMIT_BYTES: usize = 1 << 20;

const ITEM_ID_PARAM: &str = "item_id";

/// Create-item body that has already passed the validation schema
///
/// Handlers taking this extractor never see raw input; any problem with
/// the body is rejected as an [`ApiError`] before the handler runs.
pub struct ValidatedItem(pub NewItem);

impl<S> FromRequest<S> for ValidatedItem
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !is_json(&parts.headers) {
            return Err(errors::unsupported_media_type().into());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                errors::payload_too_large(BODY_LIMIT_BYTES)
            } else {
                errors::unreadable_body(&err)
            }
        })?;

        let raw: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            ValidationFailure::single(FieldPath::request(Location::Body), format!("invalid JSON: {e}"))
        })?;

        Ok(Self(schema::validate_new_item(&raw)?))
    }
}

fn is_json(headers: &http::HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// `item_id` path parameter parsed as an integer
///
/// Non-integer input is a validation failure on `item_id`, never a bare
/// text rejection. The range is wider than [`ItemId`](crate::ItemId) so
/// integers no item can have are still reported as not found.
pub struct ItemIdPath(pub i128);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| anyhow::anyhow!("route is missing the {ITEM_ID_PARAM} parameter: {e}"))?;

        raw.parse::<i128>().map(Self).map_err(|_| {
            ValidationFailure::single(FieldPath::path(ITEM_ID_PARAM), "must be a valid integer").into()
        })
    }
}
