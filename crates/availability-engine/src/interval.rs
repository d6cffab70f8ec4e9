//! Time intervals with order-insensitive durations.

use chrono::{DateTime, Duration, Utc};

const MS_PER_MINUTE: i64 = 60_000;

/// A `(start, end)` pair of instants.
///
/// `start <= end` is not enforced: callers may build zero- or negative-length
/// intervals. [`duration`](Self::duration) is always the absolute length, while
/// [`effective_duration`](Self::effective_duration) keeps the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The overall range scanned for availability.
pub type SearchWindow = TimeInterval;

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Absolute length of the interval, `|end - start|`.
    pub fn duration(&self) -> Duration {
        (self.end - self.start).abs()
    }

    /// Absolute length in whole minutes (truncated).
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_milliseconds() / MS_PER_MINUTE
    }

    /// Signed length, `end - start`. Negative when the interval is inverted.
    pub fn effective_duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when `end < start`.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}
