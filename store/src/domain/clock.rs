//! Wall-clock source for client-written timestamps.

use chrono::{DateTime, Utc};

/// Supplies "now" for `completed_at` / `updated_at`.
///
/// Read once per mutation so both fields of a patch carry the same instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Browser/system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant (tests, replay)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
