//! The availability scan: free slots between ordered busy intervals.
//!
//! A single pass walks the busy list with a cursor sitting at the end of the
//! previous busy interval. Each gap is trimmed by the buffer on the sides that
//! touch a busy interval. The window boundaries themselves are never
//! buffered: the first gap starts at the raw window start and the last gap
//! ends at the raw window end.
//!
//! Busy intervals must be sorted by start and must not overlap. The scan does
//! not sort, merge, or reject input; [`is_chronological`] lets callers check
//! the precondition themselves.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use crate::interval::{SearchWindow, TimeInterval};
use crate::slot::AvailabilitySlot;

/// Buffer and minimum-duration rules for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchParams {
    /// Minutes trimmed from each side of a gap that touches a busy interval.
    pub buffer_minutes: u32,
    /// Slots shorter than this are discarded.
    pub min_duration_minutes: u32,
}

impl SearchParams {
    pub fn new(buffer_minutes: u32, min_duration_minutes: u32) -> Self {
        Self {
            buffer_minutes,
            min_duration_minutes,
        }
    }
}

/// Find the free slots within `window` around the ordered `busy` intervals.
///
/// A slot is kept when its signed length `end - start` is at least
/// `params.min_duration_minutes`. Inverted artefacts produced by overlapping
/// or unsorted input, or by a window that ends before it starts, therefore
/// never reach the result.
///
/// With no busy intervals the result is the whole window (if long enough).
/// Returns slots in chronological order.
pub fn compute_availability(
    window: &SearchWindow,
    busy: &[TimeInterval],
    params: SearchParams,
) -> Vec<AvailabilitySlot> {
    let buffer = Duration::minutes(i64::from(params.buffer_minutes));
    let minimum = Duration::minutes(i64::from(params.min_duration_minutes));

    let mut slots = Vec::with_capacity(busy.len() + 1);
    let mut cursor = window.start;
    let mut is_first_gap = true;

    for interval in busy {
        let gap_start = if is_first_gap {
            Some(cursor)
        } else {
            cursor.checked_add_signed(buffer)
        };
        is_first_gap = false;
        let gap_end = interval.start.checked_sub_signed(buffer);
        keep_if_long_enough(&mut slots, gap_start, gap_end, minimum);
        cursor = interval.end;
    }

    // Trailing gap after the last busy interval.
    let gap_start = if is_first_gap {
        Some(cursor)
    } else {
        cursor.checked_add_signed(buffer)
    };
    keep_if_long_enough(&mut slots, gap_start, Some(window.end), minimum);

    debug!(
        busy = busy.len(),
        slots = slots.len(),
        buffer_minutes = params.buffer_minutes,
        min_duration_minutes = params.min_duration_minutes,
        "computed availability"
    );

    slots
}

/// A boundary that cannot be padded without leaving chrono's range lies
/// outside any representable gap, so the candidate is dropped.
fn keep_if_long_enough(
    slots: &mut Vec<AvailabilitySlot>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    minimum: Duration,
) {
    let (Some(start), Some(end)) = (start, end) else {
        trace!("candidate slot padded out of range");
        return;
    };
    let gap = TimeInterval::new(start, end);
    let kept = gap.effective_duration() >= minimum;
    trace!(start = %gap.start, end = %gap.end, kept, "candidate slot");
    if kept {
        slots.push(gap.into());
    }
}

/// Find the first slot of the scan, if any.
///
/// Delegates to [`compute_availability`].
pub fn find_first_slot(
    window: &SearchWindow,
    busy: &[TimeInterval],
    params: SearchParams,
) -> Option<AvailabilitySlot> {
    compute_availability(window, busy, params).into_iter().next()
}

/// Check the scan precondition: every interval runs forwards, and each one
/// ends no later than the next one starts.
pub fn is_chronological(busy: &[TimeInterval]) -> bool {
    busy.iter().all(|interval| !interval.is_inverted())
        && busy.windows(2).all(|pair| pair[0].end <= pair[1].start)
}
