//! # Movie Catalog Connector
//!
//! HTTP client for the upstream movie catalog API, implementing
//! [`CatalogConnector`](movie_favorites_core::CatalogConnector).
//!
//! ## Example
//!
//! ```no_run
//! use movie_favorites_catalog::HttpCatalogConnector;
//! use movie_favorites_core::CatalogConnector;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = HttpCatalogConnector::new(
//!     "https://movies.example.com/movie-api",
//!     Duration::from_secs(10),
//! )?;
//!
//! let movies = connector.list_items().await?;
//! let detail = connector.get_item("tt0111161").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Upstream contract
//!
//! - `GET {base}/list` → `{"ok": true, "description": [Movie, ...]}`
//! - `GET {base}/{id}` → `{"ok": true, "description": Movie}`
//!
//! An unknown id on the detail endpoint may come back as `200` with a blank
//! movie; see [`CatalogItem::is_blank`](movie_favorites_core::CatalogItem::is_blank).

pub mod client;
pub mod error;
pub mod types;

pub use client::HttpCatalogConnector;
pub use error::ConnectorError;
