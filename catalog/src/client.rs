//! HTTP implementation of the catalog connector.

use crate::error::ConnectorError;
use crate::types::{MovieDetailResponse, MovieListResponse};
use movie_favorites_core::{BoxFuture, CatalogConnector, CatalogItem, DomainError};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Movie catalog API client.
///
/// The timeout is client-wide and applies to every call; there is no
/// per-call override and no retry.
#[derive(Clone, Debug)]
pub struct HttpCatalogConnector {
    client: Client,
    base_url: Url,
}

impl HttpCatalogConnector {
    /// Create a new connector against `base_url`.
    ///
    /// # Errors
    ///
    /// - `ConnectorError::InvalidBaseUrl` if `base_url` is not an absolute http(s) URL
    /// - `ConnectorError::Client` if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConnectorError> {
        let invalid = |reason: String| ConnectorError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segment: &str) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::Internal("movie API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Issue one GET and decode the body, classifying every failure.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DomainError> {
        tracing::debug!(%url, "Calling movie API");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                "timed out"
            } else if e.is_connect() {
                "connection failed"
            } else {
                "request failed"
            };
            tracing::warn!(%url, error = %e, reason, "Movie API unreachable");
            DomainError::UpstreamUnavailable(format!("unable to reach movie API: {reason}"))
        })?;

        match response.status() {
            status if status.is_success() => {
                response.json::<T>().await.map_err(|e| {
                    tracing::warn!(%url, error = %e, "Movie API returned an undecodable body");
                    DomainError::UpstreamUnavailable(
                        "unable to decode movie API response".to_string(),
                    )
                })
            }
            StatusCode::NOT_FOUND => Err(DomainError::NotFound("movie not found".to_string())),
            status => {
                tracing::warn!(%url, %status, "Movie API returned an error status");
                Err(DomainError::UpstreamUnavailable(format!(
                    "movie API responded with {status}"
                )))
            }
        }
    }
}

impl CatalogConnector for HttpCatalogConnector {
    fn list_items(&self) -> BoxFuture<'_, Vec<CatalogItem>> {
        Box::pin(async move {
            let url = self.endpoint("list")?;
            let body: MovieListResponse = self.get_json(url).await?;
            Ok(body.description.into_iter().map(CatalogItem::from).collect())
        })
    }

    fn get_item<'a>(&'a self, id: &'a str) -> BoxFuture<'a, CatalogItem> {
        Box::pin(async move {
            let url = self.endpoint(id)?;
            let body: MovieDetailResponse = self.get_json(url).await?;
            let item = CatalogItem::from(body.description);

            // Upstream signals "absent" with a blank 200 body.
            if item.is_blank() {
                return Err(DomainError::NotFound("movie not found".to_string()));
            }
            Ok(item)
        })
    }
}
