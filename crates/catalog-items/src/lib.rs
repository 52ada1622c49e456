#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod errors;
mod request;
pub mod schema;
mod store;
mod types;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use catalog_core::ApiError;
use http::StatusCode;

pub use request::{BODY_LIMIT_BYTES, ItemIdPath, ValidatedItem};
pub use store::ItemStore;
pub use types::{Item, ItemDetails, ItemId, NewItem};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Build the item store, loading the configured seed items
///
/// Seed items go through the same schema rules as created items.
pub async fn build_store(config: &catalog_config::Config) -> anyhow::Result<ItemStore> {
    let seed = config
        .catalog
        .seed
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            schema::new_item(&seed.name, seed.price)
                .map_err(|e| anyhow::anyhow!("invalid catalog.seed[{index}]: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let store = ItemStore::with_seed(seed).await?;

    tracing::debug!("item store initialized with {} seed item(s)", store.len().await);

    Ok(store)
}

/// Create the endpoint router for items
pub fn endpoint_router() -> Router<ItemStore> {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/{item_id}", get(fetch_item))
}

/// Handle `GET /items/{item_id}`
async fn fetch_item(State(store): State<ItemStore>, ItemIdPath(id): ItemIdPath) -> Result<Json<ItemDetails>> {
    tracing::debug!(item_id = %id, "fetching item");

    let found = match ItemId::try_from(id) {
        Ok(id) => store.get(id).await,
        Err(_) => None,
    };

    let item = found.ok_or_else(|| errors::item_not_found(id))?;

    Ok(Json(item.into()))
}

/// Handle `POST /items`
async fn create_item(
    State(store): State<ItemStore>,
    ValidatedItem(new_item): ValidatedItem,
) -> Result<(StatusCode, Json<Item>)> {
    let item = store.create(new_item).await?;

    tracing::debug!(item_id = item.id, name = %item.name, "item created");

    Ok((StatusCode::CREATED, Json(item)))
}
