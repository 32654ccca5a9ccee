// tests/support/mocks/time.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, DurationRound, Utc};
use once_cell::sync::Lazy;

/// Start of test time. Tokens are validated against the wall clock, so this
/// has to be close to real time rather than a fixed date.
static BASE_TIME: Lazy<DateTime<Utc>> = Lazy::new(|| {
    let now = Utc::now();
    now.duration_trunc(Duration::seconds(1)).unwrap_or(now)
});

pub fn base_time() -> DateTime<Utc> {
    *BASE_TIME
}

/// Moves forward one second per reading so every write gets a distinct
/// timestamp and listings have a stable order.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl blog_core::application::ports::time::Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        base_time() + Duration::seconds(tick)
    }
}
