//! In-memory favorite repository.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on a poisoned lock

use movie_favorites_core::environment::{Clock, SystemClock};
use movie_favorites_core::{
    BoxFuture, DomainError, FavoriteRecord, FavoriteRepository, NewFavorite,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<FavoriteRecord>,
    failure: Option<DomainError>,
    latency: Option<Duration>,
}

/// In-memory favorite store for fast, deterministic testing.
///
/// Insert-order is creation order. The duplicate check and the insert happen
/// under one lock, mirroring the atomicity of a database unique constraint.
///
/// # Example
///
/// ```
/// use movie_favorites_core::{FavoriteRepository, NewFavorite, DomainError};
/// use movie_favorites_testing::InMemoryFavoriteRepository;
///
/// # async fn example() {
/// let repo = InMemoryFavoriteRepository::new();
/// let favorite = NewFavorite { id: "tt1".into(), title: "Heat".into(), year: 1995, rating: 8.3 };
///
/// repo.add(favorite.clone()).await.unwrap();
/// assert!(matches!(repo.add(favorite).await, Err(DomainError::Conflict(_))));
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryFavoriteRepository {
    inner: Arc<Mutex<Inner>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFavoriteRepository {
    /// Create an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty repository stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            clock,
        }
    }

    /// Make every subsequent operation fail with `error` (e.g. pool exhaustion).
    pub fn fail_with(&self, error: DomainError) {
        self.inner.lock().unwrap().failure = Some(error);
    }

    /// Stop injecting failures.
    pub fn recover(&self) {
        self.inner.lock().unwrap().failure = None;
    }

    /// Delay every operation by `latency` before it touches the store, like a
    /// slow query. Dropping the call during the delay leaves the store untouched.
    pub fn set_latency(&self, latency: Duration) {
        self.inner.lock().unwrap().latency = Some(latency);
    }

    async fn simulate_latency(&self) {
        let latency = self.inner.lock().unwrap().latency;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().records.is_empty()
    }

    /// Whether a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().records.iter().any(|r| r.id == id)
    }
}

impl Default for InMemoryFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteRepository for InMemoryFavoriteRepository {
    fn list(&self) -> BoxFuture<'_, Vec<FavoriteRecord>> {
        Box::pin(async move {
            self.simulate_latency().await;
            let inner = self.inner.lock().unwrap();
            if let Some(err) = &inner.failure {
                return Err(err.clone());
            }
            Ok(inner.records.clone())
        })
    }

    fn add(&self, favorite: NewFavorite) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.simulate_latency().await;
            let mut inner = self.inner.lock().unwrap();
            if let Some(err) = &inner.failure {
                return Err(err.clone());
            }
            if inner.records.iter().any(|r| r.id == favorite.id) {
                return Err(DomainError::Conflict(
                    "movie already in favorite list".to_string(),
                ));
            }

            // Keep timestamps non-decreasing even if the clock steps back.
            let now = self.clock.now();
            let created_at = inner
                .records
                .last()
                .map_or(now, |last| last.created_at.max(now));
            inner
                .records
                .push(FavoriteRecord::from_new(favorite, created_at));
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.simulate_latency().await;
            let mut inner = self.inner.lock().unwrap();
            if let Some(err) = &inner.failure {
                return Err(err.clone());
            }
            let before = inner.records.len();
            inner.records.retain(|r| r.id != id);
            if inner.records.len() == before {
                return Err(DomainError::NotFound(
                    "movie not found in favorite list".to_string(),
                ));
            }
            Ok(())
        })
    }
}
