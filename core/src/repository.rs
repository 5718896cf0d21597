//! Favorite persistence capability.

use crate::model::{FavoriteRecord, NewFavorite};
use crate::BoxFuture;

/// Durable storage for favorite records.
///
/// At most one record exists per identifier. That invariant is enforced by
/// the store's own uniqueness constraint, never by a read-then-write check in
/// application code.
///
/// # Implementations
///
/// - `PostgresFavoriteRepository` (in `movie-favorites-postgres`): production
/// - `InMemoryFavoriteRepository` (in `movie-favorites-testing`): fast, deterministic tests
pub trait FavoriteRepository: Send + Sync {
    /// All records ordered by creation time, oldest first.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// - `UpstreamUnavailable`: the storage pool could not serve the query in time
    /// - `Internal`: any other storage failure
    fn list(&self) -> BoxFuture<'_, Vec<FavoriteRecord>>;

    /// Insert one record.
    ///
    /// # Errors
    ///
    /// - `Conflict`: a record with the same identifier already exists
    /// - `UpstreamUnavailable` / `Internal`: as for [`FavoriteRepository::list`]
    fn add(&self, favorite: NewFavorite) -> BoxFuture<'_, ()>;

    /// Delete the record with the given identifier.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record had that identifier
    /// - `UpstreamUnavailable` / `Internal`: as for [`FavoriteRepository::list`]
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ()>;
}
