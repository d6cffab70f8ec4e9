//! Date arithmetic -- converts user-facing date text and relative offsets
//! ("5d", "1w") into UTC instants.
//!
//! Parsing is locale-independent: a fixed list of formats is tried in order.
//! Text that carries its own offset (RFC 3339, RFC 2822) is taken as-is;
//! zone-less text is read as wall-clock time in the caller's timezone.

use crate::error::{AvailabilityError, Result};
use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Zone-less date-time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m-%d-%Y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
];

/// Parse a date string, reading zone-less text as UTC.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDateFormat` if the text matches none of
/// the accepted layouts or names a date that does not exist.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    parse_date_in(text, Tz::UTC)
}

/// Parse a date string, reading zone-less text as wall-clock time in `tz`.
///
/// A wall-clock time skipped by a DST transition is rejected; one repeated by
/// a transition resolves to its earliest instant.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDateFormat` if the text does not resolve
/// to a valid instant.
pub fn parse_date_in(text: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let trimmed = text.trim();
    let invalid = || AvailabilityError::InvalidDateFormat(text.to_string());

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    local_to_utc(&naive, tz).ok_or_else(invalid)
}

/// Resolve a wall-clock time in `tz` to UTC, taking the earliest instant when
/// the local time is ambiguous.
pub(crate) fn local_to_utc(naive: &NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Unit codes accepted by [`apply_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    /// `s`
    Second,
    /// `m`
    Minute,
    /// `h`
    Hour,
    /// `d`
    Day,
    /// `w`
    Week,
    /// `M` -- calendar months, clamped to the last day of short months
    Month,
    /// `y` -- calendar years
    Year,
}

impl OffsetUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(Self::Second),
            'm' => Some(Self::Minute),
            'h' => Some(Self::Hour),
            'd' => Some(Self::Day),
            'w' => Some(Self::Week),
            'M' => Some(Self::Month),
            'y' => Some(Self::Year),
            _ => None,
        }
    }

    fn apply(self, base: DateTime<Utc>, count: i64) -> Option<DateTime<Utc>> {
        let fixed = match self {
            Self::Second => Duration::try_seconds(count),
            Self::Minute => Duration::try_minutes(count),
            Self::Hour => Duration::try_hours(count),
            Self::Day => Duration::try_days(count),
            Self::Week => Duration::try_weeks(count),
            Self::Month => return shift_months(base, count),
            Self::Year => return shift_months(base, count.checked_mul(12)?),
        };
        base.checked_add_signed(fixed?)
    }
}

fn shift_months(base: DateTime<Utc>, count: i64) -> Option<DateTime<Utc>> {
    let months = Months::new(u32::try_from(count.unsigned_abs()).ok()?);
    if count >= 0 {
        base.checked_add_months(months)
    } else {
        base.checked_sub_months(months)
    }
}

/// Advance `base` by an offset such as `"5d"`, `"1w"` or `"-3h"`.
///
/// The offset is a signed integer followed by a single unit code (see
/// [`OffsetUnit`]). Negative magnitudes move `base` backwards.
///
/// # Errors
/// Returns `AvailabilityError::InvalidOffsetFormat` if the unit is unknown,
/// the magnitude is not an integer, or the result is out of range.
pub fn apply_offset(base: DateTime<Utc>, offset: &str) -> Result<DateTime<Utc>> {
    let invalid = || AvailabilityError::InvalidOffsetFormat(offset.to_string());
    let trimmed = offset.trim();

    let code = trimmed.chars().last().ok_or_else(invalid)?;
    let unit = OffsetUnit::from_code(code).ok_or_else(invalid)?;
    let count: i64 = trimmed[..trimmed.len() - code.len_utf8()]
        .parse()
        .map_err(|_| invalid())?;

    unit.apply(base, count).ok_or_else(invalid)
}
