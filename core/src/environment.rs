//! Injected environment dependencies.

use chrono::{DateTime, Utc};

/// Clock trait - abstracts time for testability.
///
/// Production storage assigns timestamps itself; in-memory stores take a
/// clock so tests can pin `created_at`.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
