//! Explicit configuration for an availability search.
//!
//! Nothing in the engine reads ambient state: the default buffer, the display
//! pattern, and the timezone all travel in an [`AvailabilityConfig`].

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{AvailabilityError, Result};
use crate::gaps::SearchParams;
use crate::slot::{validate_display_format, DEFAULT_DISPLAY_FORMAT};

/// Search configuration, deserialisable from a config file.
///
/// Missing fields take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Travel/preparation minutes around each busy interval.
    pub buffer_minutes: u32,
    /// Shortest slot worth reporting, in minutes.
    pub min_duration_minutes: u32,
    /// strftime pattern for slot boundaries.
    pub display_format: String,
    /// IANA timezone for display and for zone-less input.
    pub timezone: String,
}

impl AvailabilityConfig {
    pub const DEFAULT_BUFFER_MINUTES: u32 = 30;

    pub fn params(&self) -> SearchParams {
        SearchParams::new(self.buffer_minutes, self.min_duration_minutes)
    }

    /// The configured timezone.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidTimezone` if `timezone` is not a
    /// valid IANA identifier.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| AvailabilityError::InvalidTimezone(self.timezone.clone()))
    }

    /// Check the timezone and display pattern.
    pub fn validate(&self) -> Result<()> {
        self.tz()?;
        validate_display_format(&self.display_format)
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: Self::DEFAULT_BUFFER_MINUTES,
            min_duration_minutes: 0,
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            timezone: "UTC".to_string(),
        }
    }
}
