//! Construction errors for the catalog connector.
//!
//! Per-call failures are reported as
//! [`DomainError`](movie_favorites_core::DomainError); these only occur while
//! building the client at startup.

use thiserror::Error;

/// Errors that can occur when building an [`HttpCatalogConnector`](crate::HttpCatalogConnector).
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid movie API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
