//! Upstream wire types.

use movie_favorites_core::CatalogItem;
use serde::Deserialize;

/// A movie as described by the upstream API.
///
/// Every field defaults so a blank "absent" answer still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieDescription {
    /// Title
    pub title: String,
    /// Release year
    pub year: i32,
    /// IMDb identifier, used as the catalog id
    pub imdb_id: String,
    /// Chart position
    pub rank: i32,
    /// Comma-separated cast
    pub actors: String,
    /// IMDb page
    pub imdb_url: String,
    /// Rating
    pub rating: f32,
}

impl From<MovieDescription> for CatalogItem {
    fn from(movie: MovieDescription) -> Self {
        Self {
            id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
        }
    }
}

/// Body of `GET {base}/list`.
#[derive(Debug, Deserialize)]
pub struct MovieListResponse {
    /// Upstream success flag (informational)
    #[serde(default)]
    pub ok: bool,
    /// Movies
    #[serde(default)]
    pub description: Vec<MovieDescription>,
}

/// Body of `GET {base}/{id}`.
#[derive(Debug, Deserialize)]
pub struct MovieDetailResponse {
    /// Upstream success flag (informational)
    #[serde(default)]
    pub ok: bool,
    /// The movie, blank when the id is unknown
    #[serde(default)]
    pub description: MovieDescription,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_decodes_full_movie() {
        let body = r#"{
            "ok": true,
            "description": {
                "title": "The Godfather",
                "year": 1972,
                "imdb_id": "tt0068646",
                "rank": 2,
                "actors": "Marlon Brando, Al Pacino",
                "imdb_url": "https://imdb.com/title/tt0068646",
                "rating": 9.2
            }
        }"#;
        let detail: MovieDetailResponse = serde_json::from_str(body).unwrap();
        let item = CatalogItem::from(detail.description);
        assert_eq!(item.id, "tt0068646");
        assert_eq!(item.year, 1972);
        assert!(!item.is_blank());
    }

    #[test]
    fn test_detail_absent_signal_decodes_blank() {
        let detail: MovieDetailResponse =
            serde_json::from_str(r#"{"ok": true, "description": {}}"#).unwrap();
        assert!(CatalogItem::from(detail.description).is_blank());
    }
}
