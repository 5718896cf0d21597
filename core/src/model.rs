//! Data model: catalog items fetched upstream and persisted favorites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only snapshot of an upstream movie at fetch time. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Upstream-assigned identifier.
    #[serde(rename = "movie_id")]
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Upstream rating.
    pub rating: f32,
}

impl CatalogItem {
    /// Create a new catalog item.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32, rating: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            rating,
        }
    }

    /// Whether this looks like the upstream's "absent" signal.
    ///
    /// The detail endpoint answers an unknown id with a structurally valid
    /// body whose title is blank or whose year is zero, rather than a 404.
    /// That is indistinguishable from a genuinely incomplete item, so treat
    /// this as a compatibility heuristic and nothing stronger.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.year == 0
    }
}

/// Values captured from a [`CatalogItem`] when a favorite is added.
///
/// The creation timestamp is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    /// Catalog identifier; unique across favorites.
    pub id: String,
    /// Denormalized title.
    pub title: String,
    /// Denormalized year.
    pub year: i32,
    /// Denormalized rating.
    pub rating: f32,
}

impl From<CatalogItem> for NewFavorite {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            year: item.year,
            rating: item.rating,
        }
    }
}

/// A persisted, user-curated reference to a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Catalog identifier (unique key).
    #[serde(rename = "movie_id")]
    pub id: String,
    /// Title at add-time.
    pub title: String,
    /// Year at add-time.
    pub year: i32,
    /// Rating at add-time.
    pub rating: f32,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Materialize a stored record from an insert payload and its timestamp.
    #[must_use]
    pub fn from_new(new: NewFavorite, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            title: new.title,
            year: new.year,
            rating: new.rating,
            created_at,
        }
    }
}
