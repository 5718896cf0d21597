//! Upstream catalog capability.

use crate::model::CatalogItem;
use crate::BoxFuture;

/// Read access to the upstream movie catalog.
///
/// # Implementations
///
/// - `HttpCatalogConnector` (in `movie-favorites-catalog`): production HTTP client
/// - `StubCatalogConnector` (in `movie-favorites-testing`): in-memory double
///
/// Implementations make exactly one attempt per call; retry policy, if any,
/// belongs to the caller. Dropping the returned future abandons the call.
pub trait CatalogConnector: Send + Sync {
    /// List every item the upstream catalog exposes.
    ///
    /// # Errors
    ///
    /// - `UpstreamUnavailable`: transport failure, non-2xx status or undecodable body
    fn list_items(&self) -> BoxFuture<'_, Vec<CatalogItem>>;

    /// Fetch a single item by identifier.
    ///
    /// # Errors
    ///
    /// - `NotFound`: upstream answered 404 or with a blank item
    /// - `UpstreamUnavailable`: any other transport or status failure
    fn get_item<'a>(&'a self, id: &'a str) -> BoxFuture<'a, CatalogItem>;
}
