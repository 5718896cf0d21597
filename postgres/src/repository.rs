//! `PostgreSQL` implementation of [`FavoriteRepository`].

use chrono::{DateTime, Utc};
use movie_favorites_core::{
    BoxFuture, DomainError, FavoriteRecord, FavoriteRepository, NewFavorite,
};
use sqlx::PgPool;

/// Row shape of `favorite_movies`.
#[derive(Debug, sqlx::FromRow)]
struct FavoriteRow {
    movie_id: String,
    title: String,
    year: i32,
    rating: f32,
    created_at: DateTime<Utc>,
}

impl From<FavoriteRow> for FavoriteRecord {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.movie_id,
            title: row.title,
            year: row.year,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}

/// `PostgreSQL` favorite repository.
///
/// Owns the pool handle exclusively. Every operation is a single statement;
/// dropping the returned future (caller cancelled or its deadline elapsed)
/// abandons the statement and releases the connection.
#[derive(Clone, Debug)]
pub struct PostgresFavoriteRepository {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    /// Create a new repository over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns error if migrations fail.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Underlying pool, for health checks and shutdown.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Classify a sqlx failure.
///
/// Pool exhaustion and lost connections are reported as `UpstreamUnavailable`
/// (the store is a dependency that could not serve the request in time);
/// anything unrecognised is `Internal`.
fn classify(err: sqlx::Error, operation: &'static str) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict("movie already in favorite list".to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(operation, error = %err, "Database unavailable");
            DomainError::UpstreamUnavailable(format!("database unavailable during {operation}"))
        }
        _ => {
            tracing::error!(operation, error = %err, "Database operation failed");
            DomainError::Internal(format!("failed to {operation} favorites"))
        }
    }
}

impl FavoriteRepository for PostgresFavoriteRepository {
    fn list(&self) -> BoxFuture<'_, Vec<FavoriteRecord>> {
        Box::pin(async move {
            let rows: Vec<FavoriteRow> = sqlx::query_as(
                r"
                SELECT movie_id, title, year, rating, created_at
                FROM favorite_movies
                ORDER BY seq ASC
                ",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, "list"))?;

            Ok(rows.into_iter().map(FavoriteRecord::from).collect())
        })
    }

    fn add(&self, favorite: NewFavorite) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            sqlx::query(
                r"
                INSERT INTO favorite_movies (movie_id, title, year, rating)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(&favorite.id)
            .bind(&favorite.title)
            .bind(favorite.year)
            .bind(favorite.rating)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, "add"))?;

            tracing::debug!(movie_id = %favorite.id, "Favorite row inserted");
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM favorite_movies WHERE movie_id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| classify(e, "delete"))?;

            if result.rows_affected() == 0 {
                return Err(DomainError::NotFound(
                    "movie not found in favorite list".to_string(),
                ));
            }
            Ok(())
        })
    }
}
