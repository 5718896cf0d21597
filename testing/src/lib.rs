//! # Movie Favorites Testing
//!
//! In-memory implementations of the core capability traits.
//!
//! This crate provides:
//! - [`InMemoryFavoriteRepository`]: `Vec`-backed favorite store with the
//!   same uniqueness and ordering rules as the Postgres store
//! - [`StubCatalogConnector`]: scripted upstream catalog
//! - [`FixedClock`]: deterministic time
//!
//! ## Example
//!
//! ```
//! use movie_favorites_core::{CatalogItem, FavoriteService};
//! use movie_favorites_testing::{InMemoryFavoriteRepository, StubCatalogConnector};
//! use std::sync::Arc;
//!
//! # async fn example() -> movie_favorites_core::Result<()> {
//! let catalog = StubCatalogConnector::with_items([
//!     CatalogItem::new("tt0111161", "The Shawshank Redemption", 1994, 9.3),
//! ]);
//! let service = FavoriteService::new(
//!     Arc::new(catalog),
//!     Arc::new(InMemoryFavoriteRepository::new()),
//! );
//!
//! service.add_favorite("tt0111161").await?;
//! assert_eq!(service.list_favorites().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod repository;

use chrono::{DateTime, Utc};
use movie_favorites_core::environment::Clock;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use movie_favorites_testing::mocks::FixedClock;
    /// use movie_favorites_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }
}

pub use catalog::StubCatalogConnector;
pub use mocks::{FixedClock, test_clock};
pub use repository::InMemoryFavoriteRepository;
