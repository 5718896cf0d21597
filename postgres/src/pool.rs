//! Connection pool construction.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Tuning for the shared storage pool.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// `PostgreSQL` connection URL
    pub url: String,
    /// Maximum number of concurrent connections
    pub max_connections: u32,
    /// Connections kept warm
    pub min_connections: u32,
    /// Idle connections older than this are evicted
    pub idle_timeout: Duration,
    /// How long a query may wait for a free connection before failing
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    /// Settings for `url` with the service defaults: 10 max, 2 min, 5 minute
    /// idle eviction, 5 second acquire timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            idle_timeout: Duration::from_secs(5 * 60),
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Build the pool and open its first connection.
    ///
    /// # Errors
    ///
    /// Returns the sqlx error if the URL is invalid or the database cannot
    /// be reached. Callers treat this as fatal.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .idle_timeout(self.idle_timeout)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.url)
            .await?;

        tracing::info!(
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            idle_timeout_secs = self.idle_timeout.as_secs(),
            "Database pool ready"
        );
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PoolSettings::new("postgres://localhost/favorites");
        assert_eq!(settings.max_connections, 10);
        assert_eq!(settings.min_connections, 2);
        assert_eq!(settings.idle_timeout, Duration::from_secs(300));
    }
}
