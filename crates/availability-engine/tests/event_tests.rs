//! Tests for event ingestion and boundary resolution.

use availability_engine::event::{busy_intervals, parse_events, CalendarEvent, EventTime};
use availability_engine::{AvailabilityError, TimeInterval};
use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

#[test]
fn timed_and_date_only_boundaries() {
    let json = r#"[
        {
            "summary": "Standup",
            "start": { "dateTime": "2018-10-10T10:15:00-04:00" },
            "end": { "dateTime": "2018-10-10T11:30:00-04:00" }
        },
        {
            "start": { "date": "2018-10-11" },
            "end": { "date": "2018-10-12" }
        }
    ]"#;

    let events = parse_events(json).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].summary.as_deref(), Some("Standup"));
    assert!(matches!(events[0].start, EventTime::Timed(_)));
    assert_eq!(
        events[1].start,
        EventTime::DateOnly(NaiveDate::from_ymd_opt(2018, 10, 11).unwrap())
    );
    assert_eq!(events[1].summary, None);
}

#[test]
fn items_envelope_is_accepted() {
    let json = r#"{
        "kind": "calendar#events",
        "items": [
            {
                "start": { "dateTime": "2018-10-10T10:15:00Z", "timeZone": "UTC" },
                "end": { "dateTime": "2018-10-10T11:30:00Z", "timeZone": "UTC" }
            }
        ]
    }"#;

    let events = parse_events(json).unwrap();

    assert_eq!(events.len(), 1);
}

#[test]
fn date_time_takes_precedence_over_date() {
    let json = r#"[{
        "start": { "dateTime": "2018-10-10T10:15:00Z", "date": "2018-10-10" },
        "end": { "dateTime": "2018-10-10T11:30:00Z" }
    }]"#;

    let events = parse_events(json).unwrap();

    assert!(matches!(events[0].start, EventTime::Timed(_)));
}

#[test]
fn boundary_without_date_or_time_is_rejected() {
    let json = r#"[{ "start": {}, "end": { "date": "2018-10-10" } }]"#;

    assert!(matches!(
        parse_events(json),
        Err(AvailabilityError::InvalidEvent(_))
    ));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        parse_events("{ not json"),
        Err(AvailabilityError::InvalidEvent(_))
    ));
    assert!(matches!(
        parse_events(r#"{ "kind": "calendar#events" }"#),
        Err(AvailabilityError::InvalidEvent(_))
    ));
}

#[test]
fn busy_intervals_resolve_in_order() {
    let json = r#"[
        {
            "start": { "dateTime": "2018-10-10T10:15:00-04:00" },
            "end": { "dateTime": "2018-10-10T11:30:00-04:00" }
        },
        {
            "start": { "date": "2018-10-11" },
            "end": { "date": "2018-10-12" }
        }
    ]"#;
    let events = parse_events(json).unwrap();

    let busy = busy_intervals(&events, Tz::UTC).unwrap();

    assert_eq!(
        busy,
        vec![
            TimeInterval::new(
                Utc.with_ymd_and_hms(2018, 10, 10, 14, 15, 0).unwrap(),
                Utc.with_ymd_and_hms(2018, 10, 10, 15, 30, 0).unwrap(),
            ),
            TimeInterval::new(
                Utc.with_ymd_and_hms(2018, 10, 11, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2018, 10, 12, 0, 0, 0).unwrap(),
            ),
        ]
    );
}

#[test]
fn date_only_resolves_to_local_midnight() {
    let tz: Tz = "Europe/Helsinki".parse().unwrap();
    let event = CalendarEvent {
        summary: None,
        start: EventTime::DateOnly(NaiveDate::from_ymd_opt(2018, 10, 11).unwrap()),
        end: EventTime::DateOnly(NaiveDate::from_ymd_opt(2018, 10, 12).unwrap()),
    };

    let interval = event.busy_interval(tz).unwrap();

    // Helsinki is UTC+3 in October 2018.
    assert_eq!(
        interval.start,
        Utc.with_ymd_and_hms(2018, 10, 10, 21, 0, 0).unwrap()
    );
    assert_eq!(interval.duration_minutes(), 24 * 60);
}

#[test]
fn nonexistent_local_midnight_is_invalid() {
    // Santiago skipped 2018-08-12 00:00 (clocks went straight to 01:00).
    let tz: Tz = "America/Santiago".parse().unwrap();
    let boundary = EventTime::DateOnly(NaiveDate::from_ymd_opt(2018, 8, 12).unwrap());

    assert!(matches!(
        boundary.resolve(tz),
        Err(AvailabilityError::InvalidDateFormat(_))
    ));
}

#[test]
fn empty_list() {
    assert!(parse_events("[]").unwrap().is_empty());
    assert!(parse_events(r#"{ "items": [] }"#).unwrap().is_empty());
}
