//! Catalog endpoints.

use crate::error::AppError;
use crate::WebResult;
use axum::{
    extract::{Path, State},
    Json,
};
use movie_favorites_core::{CatalogItem, CatalogService};

/// List the upstream catalog.
///
/// ```text
/// GET /catalog
/// ```
///
/// # Errors
///
/// `502` when the movie API is unreachable or fails.
pub async fn list_catalog(
    State(catalog): State<CatalogService>,
) -> WebResult<Json<Vec<CatalogItem>>> {
    let items = catalog.list_catalog().await?;
    Ok(Json(items))
}

/// Fetch one catalog item.
///
/// ```text
/// GET /catalog/:id
/// ```
///
/// # Errors
///
/// - `400` for a blank id
/// - `404` when the movie API does not know the id
/// - `502` when the movie API is unreachable or fails
pub async fn get_catalog_item(
    State(catalog): State<CatalogService>,
    Path(id): Path<String>,
) -> WebResult<Json<CatalogItem>> {
    if id.trim().is_empty() {
        return Err(AppError::bad_request("movie id is required"));
    }
    let item = catalog.get_item(&id).await?;
    Ok(Json(item))
}
