//! # availability-engine
//!
//! Finds free time inside a search window given an ordered list of busy
//! calendar intervals.
//!
//! Each gap between busy intervals becomes a candidate slot. A buffer (travel
//! or preparation time) is trimmed from the sides of a gap that touch a busy
//! interval, never from the window boundaries, and slots shorter than a
//! minimum duration are discarded.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{compute_availability, parse_date, SearchParams, TimeInterval};
//!
//! let window = TimeInterval::new(
//!     parse_date("2018-10-10T08:00:00Z").unwrap(),
//!     parse_date("2018-10-10T17:00:00Z").unwrap(),
//! );
//! let busy = vec![TimeInterval::new(
//!     parse_date("2018-10-10T10:00:00Z").unwrap(),
//!     parse_date("2018-10-10T11:00:00Z").unwrap(),
//! )];
//!
//! let slots = compute_availability(&window, &busy, SearchParams::new(15, 60));
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].duration_minutes(), 105); // 08:00-09:45
//! assert_eq!(slots[1].duration_minutes(), 345); // 11:15-17:00
//! ```
//!
//! ## Modules
//!
//! - [`dates`] — date text and relative offsets ("5d", "1w") → instants
//! - [`gaps`] — the availability scan
//! - [`interval`] — `TimeInterval` / `SearchWindow`
//! - [`slot`] — `AvailabilitySlot` and its display contract
//! - [`event`] — calendar event records with timed or date-only boundaries
//! - [`config`] — explicit configuration (buffer, minimum, display, timezone)
//! - [`error`] — Error types

pub mod config;
pub mod dates;
pub mod error;
pub mod event;
pub mod gaps;
pub mod interval;
pub mod slot;

pub use config::AvailabilityConfig;
pub use dates::{apply_offset, parse_date, parse_date_in};
pub use error::AvailabilityError;
pub use event::{busy_intervals, parse_events, CalendarEvent, EventTime};
pub use gaps::{compute_availability, find_first_slot, is_chronological, SearchParams};
pub use interval::{SearchWindow, TimeInterval};
pub use slot::{AvailabilitySlot, DEFAULT_DISPLAY_FORMAT};
