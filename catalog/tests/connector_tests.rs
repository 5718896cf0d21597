//! Connector behavior against a mocked upstream.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use movie_favorites_catalog::HttpCatalogConnector;
use movie_favorites_core::{CatalogConnector, DomainError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn movie(id: &str, title: &str, year: i32, rating: f32) -> serde_json::Value {
    json!({
        "title": title,
        "year": year,
        "imdb_id": id,
        "rank": 1,
        "actors": "",
        "imdb_url": format!("https://imdb.com/title/{id}"),
        "rating": rating,
    })
}

async fn connector_for(server: &MockServer) -> HttpCatalogConnector {
    HttpCatalogConnector::new(&format!("{}/movie-api", server.uri()), Duration::from_millis(500))
        .expect("valid mock server URL")
}

#[tokio::test]
async fn test_list_items_maps_descriptions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-api/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "description": [
                movie("tt0111161", "The Shawshank Redemption", 1994, 9.3),
                movie("tt0068646", "The Godfather", 1972, 9.2),
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = connector_for(&server).await.list_items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "tt0111161");
    assert_eq!(items[1].title, "The Godfather");
}

#[tokio::test]
async fn test_get_item_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-api/tt0068646"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "description": movie("tt0068646", "The Godfather", 1972, 9.2),
        })))
        .mount(&server)
        .await;

    let item = connector_for(&server).await.get_item("tt0068646").await.unwrap();

    assert_eq!(item.title, "The Godfather");
    assert_eq!(item.year, 1972);
}

#[tokio::test]
async fn test_get_item_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-api/tt0000000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = connector_for(&server).await.get_item("tt0000000").await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_get_item_blank_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-api/tt0000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "description": { "title": "", "year": 0, "imdb_id": "", "rating": 0 },
        })))
        .mount(&server)
        .await;

    let err = connector_for(&server).await.get_item("tt0000000").await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_server_error_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2) // one attempt per call, no retry
        .mount(&server)
        .await;

    let connector = connector_for(&server).await;

    assert!(matches!(
        connector.list_items().await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
    assert!(matches!(
        connector.get_item("tt0068646").await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-api/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = connector_for(&server).await.list_items().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": true, "description": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = connector_for(&server).await.list_items().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_connection_refused_is_upstream_unavailable() {
    // Bind then drop a listener so the port is closed.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let connector =
        HttpCatalogConnector::new(&format!("http://{addr}"), Duration::from_millis(500)).unwrap();

    let err = connector.list_items().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
}
