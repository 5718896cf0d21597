//! Application state for Axum handlers.

use axum::extract::FromRef;
use movie_favorites_core::{CatalogService, FavoriteService};

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; the services inside only hold `Arc`s to their
/// collaborators.
#[derive(Clone)]
pub struct AppState {
    /// Favorites curation
    pub favorites: FavoriteService,
    /// Upstream catalog reads
    pub catalog: CatalogService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(favorites: FavoriteService, catalog: CatalogService) -> Self {
        Self { favorites, catalog }
    }
}

impl FromRef<AppState> for FavoriteService {
    fn from_ref(state: &AppState) -> Self {
        state.favorites.clone()
    }
}

impl FromRef<AppState> for CatalogService {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
