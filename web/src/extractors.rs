//! Custom Axum extractors.
//!
//! - `JsonBody`: JSON body whose rejection is a `400` [`AppError`]
//! - `extract_client_ip`: client IP address from proxy headers or the connection

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{connect_info::ConnectInfo, FromRequest, Request},
    http::{Extensions, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use std::net::{IpAddr, SocketAddr};

/// JSON request body.
///
/// Like [`axum::Json`], but a missing, malformed or mistyped body fails fast
/// with `400` and the usual `{"error": ...}` payload, before any handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

/// Client IP address, if it can be determined.
///
/// # Priority
///
/// 1. `X-Forwarded-For` (first IP in the list)
/// 2. `X-Real-IP`
/// 3. Connection IP (when served with `ConnectInfo`)
pub(crate) fn extract_client_ip(headers: &HeaderMap, extensions: &Extensions) -> Option<IpAddr> {
    let header_ip = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
    };

    header_ip("X-Forwarded-For")
        .or_else(|| header_ip("X-Real-IP"))
        .or_else(|| {
            extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
}
