//! Server lifecycle and graceful shutdown.
//!
//! The [`Supervisor`] owns the listener and drives a one-way state machine:
//!
//! ```text
//! Starting ──bind ok──▶ Serving ──cancel──▶ Draining ──drained / timeout──▶ Stopped
//! ```
//!
//! A single [`CancellationToken`] moves it from `Serving` to `Draining`. From
//! then on no new connections are accepted, and in-flight requests get up to
//! the drain timeout to finish. Whatever is still running after that is
//! abandoned and the outcome is [`ShutdownOutcome::Forced`].
//!
//! # Example
//!
//! ```rust,ignore
//! let supervisor = Supervisor::bind(addr, router, Duration::from_secs(5)).await?;
//! let shutdown = CancellationToken::new();
//! tokio::spawn(shutdown_signal(shutdown.clone()));
//!
//! match supervisor.run(shutdown).await? {
//!     ShutdownOutcome::Clean => {}
//!     ShutdownOutcome::Forced => std::process::exit(1),
//! }
//! ```

use axum::Router;
use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Lifecycle states, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    /// Binding the listener
    Starting,
    /// Accepting and processing requests
    Serving,
    /// No longer accepting; waiting for in-flight requests
    Draining,
    /// Terminal
    Stopped,
}

impl LifecycleState {
    /// Whether `next` is a legal successor of `self`.
    ///
    /// Any state may jump to `Stopped`; otherwise states only move forward
    /// one step. There is no way back to `Serving`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Starting, Self::Serving)
                | (Self::Serving, Self::Draining)
                | (Self::Starting | Self::Serving | Self::Draining, Self::Stopped)
        )
    }
}

/// How the drain ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight request finished within the drain timeout
    Clean,
    /// The drain timeout elapsed with requests still running
    Forced,
}

/// Owns the bound listener and runs the HTTP server until cancelled.
pub struct Supervisor {
    listener: TcpListener,
    router: Router,
    drain_timeout: Duration,
    state: watch::Sender<LifecycleState>,
}

impl Supervisor {
    /// Bind the listener.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the address cannot be bound. Callers treat
    /// this as fatal; nothing has been started at that point.
    pub async fn bind(addr: SocketAddr, router: Router, drain_timeout: Duration) -> io::Result<Self> {
        let (state, _) = watch::channel(LifecycleState::Starting);
        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!(%addr, error = %e, "Failed to bind HTTP listener");
        })?;
        info!(address = %listener.local_addr()?, "HTTP listener bound");

        Ok(Self {
            listener,
            router,
            drain_timeout,
            state,
        })
    }

    /// Address the listener is bound to (useful with port `0`).
    ///
    /// # Errors
    ///
    /// Returns error if the socket address cannot be read.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Watch lifecycle transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Serve until `shutdown` is cancelled, then drain.
    ///
    /// Consumes the supervisor: once draining starts, this instance can never
    /// serve again.
    ///
    /// # Errors
    ///
    /// Returns error if the server fails while serving or draining.
    pub async fn run(self, shutdown: CancellationToken) -> io::Result<ShutdownOutcome> {
        let Self {
            listener,
            router,
            drain_timeout,
            state,
        } = self;

        advance(&state, LifecycleState::Serving);

        let server = axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown.clone().cancelled_owned());
        let mut server = std::pin::pin!(server.into_future());

        tokio::select! {
            result = &mut server => {
                // The server only returns on its own when accepting fails.
                advance(&state, LifecycleState::Stopped);
                result?;
                return Ok(ShutdownOutcome::Clean);
            }
            () = shutdown.cancelled() => {}
        }

        advance(&state, LifecycleState::Draining);
        info!(
            drain_timeout_ms = u64::try_from(drain_timeout.as_millis()).unwrap_or(u64::MAX),
            "Draining in-flight requests"
        );

        let outcome = match tokio::time::timeout(drain_timeout, server).await {
            Ok(Ok(())) => ShutdownOutcome::Clean,
            Ok(Err(e)) => {
                advance(&state, LifecycleState::Stopped);
                return Err(e);
            }
            Err(_) => ShutdownOutcome::Forced,
        };

        advance(&state, LifecycleState::Stopped);
        match outcome {
            ShutdownOutcome::Clean => info!("Graceful shutdown complete"),
            ShutdownOutcome::Forced => {
                error!("Drain timeout elapsed, abandoning in-flight requests");
            }
        }
        Ok(outcome)
    }
}

fn advance(state: &watch::Sender<LifecycleState>, next: LifecycleState) {
    let current = *state.borrow();
    if current.can_transition_to(next) {
        state.send_replace(next);
        info!(from = ?current, to = ?next, "Lifecycle transition");
    } else {
        warn!(from = ?current, to = ?next, "Ignoring illegal lifecycle transition");
    }
}

/// Wait for Ctrl+C or SIGTERM, then cancel `token`.
///
/// A handler that cannot be installed is logged and ignored; the other one
/// still works.
pub async fn shutdown_signal(token: CancellationToken) {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal"),
        () = terminate => info!("Received SIGTERM signal"),
        () = token.cancelled() => return,
    }

    token.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_only() {
        use LifecycleState::{Draining, Serving, Starting, Stopped};

        assert!(Starting.can_transition_to(Serving));
        assert!(Serving.can_transition_to(Draining));
        assert!(Draining.can_transition_to(Stopped));
        assert!(Starting.can_transition_to(Stopped));

        assert!(!Draining.can_transition_to(Serving));
        assert!(!Stopped.can_transition_to(Serving));
        assert!(!Stopped.can_transition_to(Starting));
        assert!(!Starting.can_transition_to(Draining));
    }

    #[tokio::test]
    async fn test_shutdown_signal_returns_when_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), shutdown_signal(token)).await;

        assert!(result.is_ok());
    }
}
