//! Availability slots and their display contract.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{AvailabilityError, Result};
use crate::interval::TimeInterval;

/// Abbreviated weekday, numeric month/day, 12-hour clock: `Mon 09/24 11:30 am`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%a %m/%d %-I:%M %P";

/// A free time interval found by the availability scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AvailabilitySlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    /// Absolute length in whole minutes, `|end - start| / 60000 ms`.
    pub fn duration_minutes(&self) -> i64 {
        self.interval().duration_minutes()
    }

    /// Render as `"<start> to <end>"` with both boundaries shown in `tz`.
    ///
    /// `format` must be a valid strftime pattern; see [`validate_display_format`].
    pub fn render(&self, format: &str, tz: Tz) -> String {
        format!(
            "{} to {}",
            self.start.with_timezone(&tz).format(format),
            self.end.with_timezone(&tz).format(format)
        )
    }
}

impl From<TimeInterval> for AvailabilitySlot {
    fn from(interval: TimeInterval) -> Self {
        Self::new(interval.start, interval.end)
    }
}

impl fmt::Display for AvailabilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_DISPLAY_FORMAT, Tz::UTC))
    }
}

/// Reject strftime patterns that chrono cannot format.
///
/// chrono reports a bad specifier only when the formatted value is written,
/// and some specifiers (`%#z`) are accepted by the pattern parser but can
/// never be formatted. The pattern is therefore written out once against a
/// sample instant.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDisplayFormat` if the pattern contains
/// an unknown, malformed, or parse-only specifier.
pub fn validate_display_format(format: &str) -> Result<()> {
    let invalid = || AvailabilityError::InvalidDisplayFormat(format.to_string());

    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let sample = DateTime::<Utc>::default().with_timezone(&Tz::UTC);
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format_with_items(items.iter())).map_err(|_| invalid())
}
