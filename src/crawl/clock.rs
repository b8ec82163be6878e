// src/crawl/clock.rs
// =============================================================================
// The crawler never calls Instant::now() directly. It asks a `Clock`, so
// tests can freeze time or move it forward exactly when they want to.
// =============================================================================

use std::time::Instant;

/// A source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real, monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use fake::FakeClock;
