//! Favorites endpoints.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::WebResult;
use axum::{
    extract::{Path, State},
    Json,
};
use movie_favorites_core::{FavoriteRecord, FavoriteService};
use serde::{Deserialize, Serialize};

/// Body of `POST /favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    /// Catalog id to add
    pub movie_id: String,
}

/// Confirmation payload for a successful add or remove.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteConfirmation {
    /// Human-readable outcome
    pub message: String,
    /// The affected catalog id
    pub movie_id: String,
}

fn required_id(id: &str) -> WebResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("movie_id is required"));
    }
    Ok(id)
}

/// List favorites, oldest first. An empty list is `200 []`.
///
/// ```text
/// GET /favorites
/// ```
///
/// # Errors
///
/// `502` when storage is exhausted or unreachable, `500` otherwise.
pub async fn list_favorites(
    State(favorites): State<FavoriteService>,
) -> WebResult<Json<Vec<FavoriteRecord>>> {
    let records = favorites.list_favorites().await?;
    Ok(Json(records))
}

/// Add a favorite.
///
/// ```text
/// POST /favorites
/// {"movie_id": "tt0111161"}
/// ```
///
/// # Errors
///
/// - `400` for a missing, malformed or blank `movie_id`
/// - `404` when the movie API does not know the id
/// - `409` when the movie is already a favorite
/// - `502` when a dependency is unavailable
pub async fn add_favorite(
    State(favorites): State<FavoriteService>,
    JsonBody(request): JsonBody<AddFavoriteRequest>,
) -> WebResult<Json<FavoriteConfirmation>> {
    let movie_id = required_id(&request.movie_id)?;
    favorites.add_favorite(movie_id).await?;
    Ok(Json(FavoriteConfirmation {
        message: "movie added to favorite list".to_string(),
        movie_id: movie_id.to_string(),
    }))
}

/// Remove a favorite.
///
/// ```text
/// DELETE /favorites/:id
/// ```
///
/// # Errors
///
/// - `404` when the movie is not a favorite (also on repeat deletes)
/// - `502` when storage is unavailable
pub async fn remove_favorite(
    State(favorites): State<FavoriteService>,
    Path(id): Path<String>,
) -> WebResult<Json<FavoriteConfirmation>> {
    let movie_id = required_id(&id)?;
    favorites.remove_favorite(movie_id).await?;
    Ok(Json(FavoriteConfirmation {
        message: "movie removed from favorite list".to_string(),
        movie_id: movie_id.to_string(),
    }))
}
