//! `PostgreSQL` favorite repository for the movie favorites service.
//!
//! This crate provides the production implementation of
//! [`FavoriteRepository`](movie_favorites_core::FavoriteRepository) on top of
//! a sqlx connection pool:
//!
//! - One `favorite_movies` table keyed by movie id
//! - Uniqueness enforced by the primary key, surfaced as `Conflict`
//! - Bounded pool (max/min connections, idle eviction, acquire timeout)
//! - Embedded migrations
//!
//! # Example
//!
//! ```no_run
//! use movie_favorites_postgres::{PoolSettings, PostgresFavoriteRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PoolSettings::new("postgres://localhost/favorites").connect().await?;
//! let repository = PostgresFavoriteRepository::new(pool);
//! repository.migrate().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod pool;
pub mod repository;

pub use pool::PoolSettings;
pub use repository::PostgresFavoriteRepository;
