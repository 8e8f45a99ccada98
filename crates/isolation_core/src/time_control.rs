//! Per-move clocks and the remaining-time oracle handed to move selectors.
//!
//! Searchers never read the wall clock themselves. They poll a [`TimeLeft`]
//! supplied by the caller, which is either a real [`TimeControl`] created by
//! the game driver or, in tests, a closure returning simulated values.

use std::time::{Duration, Instant};

/// Remaining time for the current move, in milliseconds.
///
/// The value may be negative once the budget is overdrawn.
pub trait TimeLeft {
    fn remaining_ms(&self) -> i64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> i64,
{
    fn remaining_ms(&self) -> i64 {
        self()
    }
}

/// A clock that never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl TimeLeft for Unlimited {
    fn remaining_ms(&self) -> i64 {
        i64::MAX
    }
}

/// Per-move wall clock, started when it is created.
#[derive(Debug, Clone, Copy)]
pub struct TimeControl {
    start: Instant,
    /// Budget for this move (None = infinite)
    limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Clock with a millisecond budget.
    pub fn with_millis(ms: u64) -> Self {
        Self::new(Some(Duration::from_millis(ms)))
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl TimeLeft for TimeControl {
    fn remaining_ms(&self) -> i64 {
        match self.limit {
            None => i64::MAX,
            Some(limit) => {
                let limit = i64::try_from(limit.as_millis()).unwrap_or(i64::MAX);
                let elapsed = i64::try_from(self.elapsed().as_millis()).unwrap_or(i64::MAX);
                limit.saturating_sub(elapsed)
            }
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
