//! Wiring: builds every component from a [`Config`].

use crate::config::Config;
use crate::lifecycle::ShutdownOutcome;
use anyhow::Context;
use axum::Router;
use movie_favorites_catalog::HttpCatalogConnector;
use movie_favorites_core::{CatalogConnector, CatalogService, FavoriteService};
use movie_favorites_postgres::PostgresFavoriteRepository;
use movie_favorites_web::{build_router, AppState};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Fully wired application, ready to be handed to a
/// [`Supervisor`](crate::Supervisor).
pub struct App {
    /// HTTP router with all routes and middleware
    pub router: Router,
    /// Storage handle, kept to close the pool after shutdown
    pub repository: PostgresFavoriteRepository,
}

impl App {
    /// Build the connector, the pool, run migrations and assemble the router.
    ///
    /// # Errors
    ///
    /// Returns error if the movie API URL is invalid, the database cannot be
    /// reached, or migrations fail. All of these are fatal at startup.
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let connector: Arc<dyn CatalogConnector> = Arc::new(
            HttpCatalogConnector::new(&config.movie_api.url, config.movie_api.timeout())
                .context("invalid movie API configuration")?,
        );

        let pool = config
            .database
            .pool_settings()
            .connect()
            .await
            .with_context(|| format!("failed to connect to {}", config.database.redacted_url()))?;

        let repository = PostgresFavoriteRepository::new(pool);
        repository
            .migrate()
            .await
            .context("failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        let state = AppState::new(
            FavoriteService::new(Arc::clone(&connector), Arc::new(repository.clone())),
            CatalogService::new(connector),
        );

        Ok(Self {
            router: build_router(state, config.server.request_timeout()),
            repository,
        })
    }

    /// Release the storage pool after the server stopped.
    ///
    /// After a clean drain the pool is closed, waiting at most `bound` for
    /// checked-out connections. After a forced drain abandoned requests may
    /// still hold connections, so the pool is left to the process exit.
    /// Returns whether the pool was closed.
    pub async fn shutdown(&self, outcome: ShutdownOutcome, bound: Duration) -> bool {
        release(outcome, bound, self.repository.pool().close()).await
    }
}

async fn release<F>(outcome: ShutdownOutcome, bound: Duration, close: F) -> bool
where
    F: Future<Output = ()>,
{
    match outcome {
        ShutdownOutcome::Forced => {
            tracing::warn!("Skipping database pool close after forced shutdown");
            false
        }
        ShutdownOutcome::Clean => {
            if tokio::time::timeout(bound, close).await.is_ok() {
                tracing::info!("Database pool closed");
                true
            } else {
                tracing::warn!(
                    bound_ms = u64::try_from(bound.as_millis()).unwrap_or(u64::MAX),
                    "Database pool did not close in time"
                );
                false
            }
        }
    }
}
