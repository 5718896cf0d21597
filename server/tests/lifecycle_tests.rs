//! Drain behavior of the supervisor over real sockets.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use axum::{routing::get, Router};
use movie_favorites_server::{LifecycleState, ShutdownOutcome, Supervisor};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

fn slow_router(delay: Duration) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(delay).await;
                "done"
            }),
        )
}

async fn start(
    delay: Duration,
    drain_timeout: Duration,
) -> (
    SocketAddr,
    CancellationToken,
    tokio::sync::watch::Receiver<LifecycleState>,
    tokio::task::JoinHandle<std::io::Result<ShutdownOutcome>>,
) {
    let supervisor = Supervisor::bind(
        "127.0.0.1:0".parse().unwrap(),
        slow_router(delay),
        drain_timeout,
    )
    .await
    .unwrap();
    let addr = supervisor.local_addr().unwrap();
    let states = supervisor.subscribe();
    let token = CancellationToken::new();
    let handle = tokio::spawn(supervisor.run(token.clone()));
    (addr, token, states, handle)
}

#[tokio::test]
async fn test_serves_requests() {
    let (addr, token, states, handle) = start(Duration::ZERO, Duration::from_secs(1)).await;

    let body = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "ok");
    assert_eq!(*states.borrow(), LifecycleState::Serving);

    token.cancel();
    assert_eq!(handle.await.unwrap().unwrap(), ShutdownOutcome::Clean);
}

#[tokio::test]
async fn test_in_flight_request_completes_during_drain() {
    let (addr, token, mut states, handle) =
        start(Duration::from_millis(300), Duration::from_secs(5)).await;

    let request = tokio::spawn(async move {
        reqwest::get(format!("http://{addr}/slow"))
            .await
            .expect("in-flight request should complete")
            .text()
            .await
            .unwrap()
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    token.cancel();
    states
        .wait_for(|s| *s == LifecycleState::Draining)
        .await
        .unwrap();

    assert_eq!(request.await.unwrap(), "done");
    assert_eq!(handle.await.unwrap().unwrap(), ShutdownOutcome::Clean);
    assert_eq!(*states.borrow(), LifecycleState::Stopped);
}

#[tokio::test]
async fn test_drain_timeout_forces_stop() {
    let drain_timeout = Duration::from_millis(200);
    let (addr, token, _states, handle) = start(Duration::from_secs(30), drain_timeout).await;

    let _request = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));
    tokio::time::sleep(Duration::from_millis(50)).await;

    let started = Instant::now();
    token.cancel();
    let outcome = handle.await.unwrap().unwrap();

    assert_eq!(outcome, ShutdownOutcome::Forced);
    assert!(started.elapsed() < drain_timeout + Duration::from_millis(500));
}

#[tokio::test]
async fn test_no_new_connections_after_stop() {
    let (addr, token, _states, handle) = start(Duration::ZERO, Duration::from_secs(1)).await;

    token.cancel();
    handle.await.unwrap().unwrap();

    let result = reqwest::Client::new()
        .get(format!("http://{addr}/health"))
        .timeout(Duration::from_millis(500))
        .send()
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_states_only_move_forward() {
    let (_addr, token, mut states, handle) = start(Duration::ZERO, Duration::from_secs(1)).await;

    let observer = tokio::spawn(async move {
        let mut seen = vec![*states.borrow_and_update()];
        while states.changed().await.is_ok() {
            seen.push(*states.borrow_and_update());
        }
        seen
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    token.cancel();
    handle.await.unwrap().unwrap();
    let seen = observer.await.unwrap();

    assert!(seen.windows(2).all(|w| w[0] < w[1]), "states went backwards: {seen:?}");
    assert_eq!(seen.last(), Some(&LifecycleState::Stopped));
    assert_eq!(seen.iter().filter(|s| **s == LifecycleState::Serving).count(), 1);
}

#[tokio::test]
async fn test_bind_failure_is_an_error() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let result = Supervisor::bind(addr, Router::new(), Duration::from_secs(1)).await;

    assert!(result.is_err());
}
