//! Business-logic layer.
//!
//! Services hold nothing but handles to their collaborators, so they are
//! cheap to clone and safe to call concurrently. They keep no cache and no
//! locks: correctness for concurrent adds of the same identifier rests
//! entirely on the repository's uniqueness constraint.

use crate::connector::CatalogConnector;
use crate::error::Result;
use crate::model::{CatalogItem, FavoriteRecord, NewFavorite};
use crate::repository::FavoriteRepository;
use std::sync::Arc;

/// Read-through access to the upstream catalog.
#[derive(Clone)]
pub struct CatalogService {
    connector: Arc<dyn CatalogConnector>,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub fn new(connector: Arc<dyn CatalogConnector>) -> Self {
        Self { connector }
    }

    /// List the upstream catalog. Fetched per call, never cached.
    ///
    /// # Errors
    ///
    /// Propagates the connector's error unchanged.
    pub async fn list_catalog(&self) -> Result<Vec<CatalogItem>> {
        self.connector.list_items().await
    }

    /// Fetch one catalog item.
    ///
    /// # Errors
    ///
    /// Propagates the connector's error unchanged (`NotFound` included).
    pub async fn get_item(&self, id: &str) -> Result<CatalogItem> {
        self.connector.get_item(id).await
    }
}

/// Curates the favorites list against the upstream catalog.
#[derive(Clone)]
pub struct FavoriteService {
    connector: Arc<dyn CatalogConnector>,
    repository: Arc<dyn FavoriteRepository>,
}

impl FavoriteService {
    /// Create a new favorite service from its two collaborators.
    #[must_use]
    pub fn new(
        connector: Arc<dyn CatalogConnector>,
        repository: Arc<dyn FavoriteRepository>,
    ) -> Self {
        Self {
            connector,
            repository,
        }
    }

    /// All favorites, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates the repository's error unchanged.
    pub async fn list_favorites(&self) -> Result<Vec<FavoriteRecord>> {
        self.repository.list().await
    }

    /// Add a catalog item to the favorites.
    ///
    /// Two steps, not atomic across stores:
    /// 1. fetch the item upstream to prove it exists,
    /// 2. insert a record denormalized from that fetch.
    ///
    /// An upstream delete between the steps does not roll back the insert.
    ///
    /// # Errors
    ///
    /// - `NotFound` from step 1, unchanged; nothing is inserted
    /// - `Conflict` from step 2, unchanged
    /// - any other connector or repository error, unchanged
    pub async fn add_favorite(&self, id: &str) -> Result<()> {
        let item = self.connector.get_item(id).await?;
        tracing::debug!(movie_id = %item.id, title = %item.title, "Catalog item verified");

        // Key by the requested id so a later delete with the same id matches.
        let favorite = NewFavorite {
            id: id.to_owned(),
            ..NewFavorite::from(item)
        };
        self.repository.add(favorite).await?;
        tracing::info!(movie_id = %id, "Favorite added");
        Ok(())
    }

    /// Remove a favorite.
    ///
    /// Does not consult the catalog: a favorite stays removable after its
    /// upstream item disappears.
    ///
    /// # Errors
    ///
    /// Propagates the repository's error unchanged (`NotFound` included).
    pub async fn remove_favorite(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await?;
        tracing::info!(movie_id = %id, "Favorite removed");
        Ok(())
    }

    /// Delegates to the catalog connector.
    ///
    /// # Errors
    ///
    /// Propagates the connector's error unchanged.
    pub async fn list_catalog(&self) -> Result<Vec<CatalogItem>> {
        self.connector.list_items().await
    }
}
