//! # Movie Favorites Server
//!
//! Process-level concerns for the movie favorites service:
//!
//! - [`config`]: environment-driven [`Config`]
//! - [`bootstrap`]: wiring of connector, pool, services and router
//! - [`lifecycle`]: the [`Supervisor`] state machine and signal handling
//!
//! The binary in `main.rs` glues these together:
//!
//! ```rust,ignore
//! let config = Config::from_env();
//! let app = App::build(&config).await?;
//! let supervisor = Supervisor::bind(config.server.bind_addr()?, app.router.clone(), config.server.drain_timeout()).await?;
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(shutdown_signal(shutdown.clone()));
//! let outcome = supervisor.run(shutdown).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod bootstrap;
pub mod config;
pub mod lifecycle;

pub use bootstrap::App;
pub use config::Config;
pub use lifecycle::{shutdown_signal, LifecycleState, ShutdownOutcome, Supervisor};
