//! Request logging middleware.
//!
//! For every request this layer:
//! 1. **Extracts** the correlation ID from `X-Correlation-ID` (or generates a UUID v4)
//! 2. **Stores** it in request extensions
//! 3. **Runs** the request inside an `http_request` span carrying the correlation id
//! 4. **Logs** method, path, status, latency and client IP once the response is ready
//! 5. **Echoes** the correlation ID on the response
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use movie_favorites_web::middleware::request_logging_layer;
//!
//! let app = Router::new()
//!     .route("/favorites", get(list_favorites))
//!     .layer(request_logging_layer());
//! ```

use crate::extractors::extract_client_ip;
use axum::{
    extract::Request,
    http::HeaderValue,
    response::Response,
};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Create a layer that logs every request with a correlation ID.
#[must_use]
pub const fn request_logging_layer() -> RequestLoggingLayer {
    RequestLoggingLayer
}

/// Layer for request logging.
#[derive(Clone, Debug)]
pub struct RequestLoggingLayer;

impl<S> Layer<S> for RequestLoggingLayer {
    type Service = RequestLoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLoggingMiddleware { inner }
    }
}

/// Middleware service for request logging.
#[derive(Clone, Debug)]
pub struct RequestLoggingMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for RequestLoggingMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let started = Instant::now();

        let correlation_id = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);
        req.extensions_mut().insert(correlation_id);

        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let client_ip = extract_client_ip(req.headers(), req.extensions())
            .map_or_else(|| "-".to_string(), |ip| ip.to_string());

        let span = tracing::info_span!(
            "http_request",
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
        );

        let fut = self.inner.call(req);

        Box::pin(
            async move {
                let mut response = fut.await?;

                tracing::info!(
                    status_code = response.status().as_u16(),
                    latency_ms = started.elapsed().as_millis(),
                    client_ip = %client_ip,
                    method = %method,
                    path = %path,
                    "Incoming request"
                );

                if let Ok(header_value) = HeaderValue::from_str(&correlation_id.to_string()) {
                    response
                        .headers_mut()
                        .insert(CORRELATION_ID_HEADER, header_value);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}
