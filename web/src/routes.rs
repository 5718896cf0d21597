//! Router configuration.

use crate::handlers::{catalog, favorites, health_check};
use crate::middleware::request_logging_layer;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Build the complete Axum router.
///
/// Every request runs under `request_timeout`; when it elapses the handler
/// future is dropped, which cancels the in-flight upstream call or query, and
/// the client gets `408`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/catalog", get(catalog::list_catalog))
        .route("/catalog/:id", get(catalog::get_catalog_item))
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/:id", delete(favorites::remove_favorite))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(request_logging_layer())
        .with_state(state)
}
