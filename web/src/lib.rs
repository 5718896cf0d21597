//! Axum HTTP boundary for the movie favorites service.
//!
//! The handlers here are purely translational: decode the request, call
//! exactly one service method, map the result. Business rules (existence,
//! uniqueness) live in `movie-favorites-core`; the only decision made here is
//! which status code a [`DomainError`](movie_favorites_core::DomainError)
//! becomes.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `GET` | `/health` | [`handlers::health_check`] |
//! | `GET` | `/catalog` | [`handlers::catalog::list_catalog`] |
//! | `GET` | `/catalog/:id` | [`handlers::catalog::get_catalog_item`] |
//! | `GET` | `/favorites` | [`handlers::favorites::list_favorites`] |
//! | `POST` | `/favorites` | [`handlers::favorites::add_favorite`] |
//! | `DELETE` | `/favorites/:id` | [`handlers::favorites::remove_favorite`] |
//!
//! # Example
//!
//! ```ignore
//! use movie_favorites_web::{build_router, AppState};
//!
//! let app = build_router(AppState::new(favorites, catalog), Duration::from_secs(30));
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::JsonBody;
pub use middleware::{request_logging_layer, CORRELATION_ID_HEADER};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
