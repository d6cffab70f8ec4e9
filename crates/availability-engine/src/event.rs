//! Calendar event records as supplied by a calendar provider.
//!
//! Event boundaries come in two shapes, matching the Google Calendar
//! `events.list` payload:
//!
//! ```json
//! { "start": { "dateTime": "2018-10-10T10:15:00Z" }, "end": { "date": "2018-10-11" } }
//! ```
//!
//! Both resolve to a UTC instant before the scan runs; date-only boundaries
//! resolve to midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::dates::local_to_utc;
use crate::error::{AvailabilityError, Result};
use crate::interval::TimeInterval;

/// A single event boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEventTime")]
pub enum EventTime {
    /// A precise instant (`dateTime`).
    Timed(DateTime<FixedOffset>),
    /// An all-day boundary (`date`).
    DateOnly(NaiveDate),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventTime {
    date_time: Option<DateTime<FixedOffset>>,
    date: Option<NaiveDate>,
}

impl TryFrom<RawEventTime> for EventTime {
    type Error = AvailabilityError;

    fn try_from(raw: RawEventTime) -> Result<Self> {
        match (raw.date_time, raw.date) {
            (Some(dt), _) => Ok(Self::Timed(dt)),
            (None, Some(date)) => Ok(Self::DateOnly(date)),
            (None, None) => Err(AvailabilityError::InvalidEvent(
                "boundary has neither dateTime nor date".to_string(),
            )),
        }
    }
}

impl EventTime {
    /// Resolve to a UTC instant. Date-only boundaries become midnight in `tz`.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidDateFormat` if midnight does not
    /// exist in `tz` on that date.
    pub fn resolve(&self, tz: Tz) -> Result<DateTime<Utc>> {
        match self {
            Self::Timed(dt) => Ok(dt.with_timezone(&Utc)),
            Self::DateOnly(date) => date
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| local_to_utc(&midnight, tz))
                .ok_or_else(|| AvailabilityError::InvalidDateFormat(date.to_string())),
        }
    }
}

/// A calendar event reduced to what the availability scan needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub summary: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

impl CalendarEvent {
    /// The busy interval this event occupies.
    pub fn busy_interval(&self, tz: Tz) -> Result<TimeInterval> {
        Ok(TimeInterval::new(self.start.resolve(tz)?, self.end.resolve(tz)?))
    }
}

/// Resolve events to busy intervals, preserving their order.
pub fn busy_intervals(events: &[CalendarEvent], tz: Tz) -> Result<Vec<TimeInterval>> {
    events.iter().map(|event| event.busy_interval(tz)).collect()
}

/// Parse events from JSON: either a bare array of events or an object with an
/// `items` array (the `events.list` response body).
///
/// # Errors
/// Returns `AvailabilityError::InvalidEvent` if the JSON is malformed or an
/// event does not have the expected shape.
pub fn parse_events(json: &str) -> Result<Vec<CalendarEvent>> {
    let invalid = |e: serde_json::Error| AvailabilityError::InvalidEvent(e.to_string());

    let value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
    let items = match value {
        serde_json::Value::Object(mut body) => body.remove("items").ok_or_else(|| {
            AvailabilityError::InvalidEvent("expected an `items` array".to_string())
        })?,
        other => other,
    };

    serde_json::from_value(items).map_err(invalid)
}
