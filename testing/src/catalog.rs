//! Scripted upstream catalog.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)]

use movie_favorites_core::{BoxFuture, CatalogConnector, CatalogItem, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<CatalogItem>,
    unavailable: bool,
    latency: Option<Duration>,
}

/// In-memory [`CatalogConnector`] with scriptable availability and latency.
///
/// Items can be removed after a favorite was added to exercise the
/// "upstream item later deleted" paths.
#[derive(Clone, Debug, Default)]
pub struct StubCatalogConnector {
    inner: Arc<RwLock<Inner>>,
    get_calls: Arc<AtomicUsize>,
}

impl StubCatalogConnector {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-filled with `items`.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let stub = Self::new();
        stub.inner.write().unwrap().items.extend(items);
        stub
    }

    /// Add or replace an item.
    pub fn insert(&self, item: CatalogItem) {
        let mut inner = self.inner.write().unwrap();
        inner.items.retain(|i| i.id != item.id);
        inner.items.push(item);
    }

    /// Remove an item, as if it was deleted upstream.
    pub fn remove(&self, id: &str) {
        self.inner.write().unwrap().items.retain(|i| i.id != id);
    }

    /// Toggle whether every call fails with `UpstreamUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.write().unwrap().unavailable = unavailable;
    }

    /// Delay every call by `latency` before answering.
    pub fn set_latency(&self, latency: Duration) {
        self.inner.write().unwrap().latency = Some(latency);
    }

    /// How many times `get_item` has been called.
    #[must_use]
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    async fn simulate_network(&self) -> Result<(), DomainError> {
        let (latency, unavailable) = {
            let inner = self.inner.read().unwrap();
            (inner.latency, inner.unavailable)
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if unavailable {
            return Err(DomainError::UpstreamUnavailable(
                "unable to reach movie API".to_string(),
            ));
        }
        Ok(())
    }
}

impl CatalogConnector for StubCatalogConnector {
    fn list_items(&self) -> BoxFuture<'_, Vec<CatalogItem>> {
        Box::pin(async move {
            self.simulate_network().await?;
            Ok(self.inner.read().unwrap().items.clone())
        })
    }

    fn get_item<'a>(&'a self, id: &'a str) -> BoxFuture<'a, CatalogItem> {
        Box::pin(async move {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.simulate_network().await?;
            self.inner
                .read()
                .unwrap()
                .items
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .ok_or_else(|| DomainError::NotFound("movie not found".to_string()))
        })
    }
}
