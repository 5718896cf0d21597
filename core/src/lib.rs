//! # Movie Favorites Core
//!
//! Domain types, error taxonomy and the business-logic layer of the movie
//! favorites service.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────┐
//! │   Handler (web crate)     │  ← decode, map errors to status codes
//! ├───────────────────────────┤
//! │   FavoriteService         │  ← business rules (this crate)
//! │   CatalogService          │
//! ├─────────────┬─────────────┤
//! │ Catalog     │ Favorite    │  ← capability traits (this crate)
//! │ Connector   │ Repository  │     implemented by `catalog` / `postgres`
//! └─────────────┴─────────────┘
//! ```
//!
//! Calls flow downward, results and [`DomainError`]s flow upward. Nothing in
//! this crate knows about HTTP status codes or SQL.
//!
//! ## Example
//!
//! ```ignore
//! use movie_favorites_core::FavoriteService;
//! use std::sync::Arc;
//!
//! let service = FavoriteService::new(Arc::new(connector), Arc::new(repository));
//! service.add_favorite("tt0111161").await?;
//! let favorites = service.list_favorites().await?;
//! ```

pub mod connector;
pub mod environment;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use chrono::{DateTime, Utc};
pub use connector::CatalogConnector;
pub use environment::{Clock, SystemClock};
pub use error::{DomainError, Result};
pub use model::{CatalogItem, FavoriteRecord, NewFavorite};
pub use repository::FavoriteRepository;
pub use service::{CatalogService, FavoriteService};

use std::future::Future;
use std::pin::Pin;

/// Boxed, `Send` future returned by the capability traits.
///
/// The traits return boxed futures instead of using `async fn` so they stay
/// dyn-compatible (`Arc<dyn FavoriteRepository>`).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;
