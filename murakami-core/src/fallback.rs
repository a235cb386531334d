//! Fixed stand-in data for when the live feed cannot be fetched.
//!
//! Callers opt into this explicitly; nothing in the fetch path substitutes
//! it on its own.

use chrono::{DateTime, Duration, Utc};

use crate::event::{AVAILABLE_STATUS, CalendarEvent, DEFAULT_STATUS, FeedTime};

/// Two bookings and one open night, relative to `now`.
pub fn mock_events(now: DateTime<Utc>) -> Vec<CalendarEvent> {
    let tomorrow = now + Duration::days(1);
    let next_week = now + Duration::days(7);
    let two_weeks = now + Duration::days(14);

    vec![
        CalendarEvent {
            uid: "mock-1".to_string(),
            summary: "Booked".to_string(),
            description: String::new(),
            start: FeedTime::Instant(tomorrow),
            end: FeedTime::Instant(next_week),
            status: DEFAULT_STATUS.to_string(),
            price: Some(250),
            is_booked: true,
        },
        CalendarEvent {
            uid: "mock-2".to_string(),
            summary: "Booked".to_string(),
            description: String::new(),
            start: FeedTime::Instant(two_weeks),
            end: FeedTime::Instant(two_weeks + Duration::days(3)),
            status: DEFAULT_STATUS.to_string(),
            price: Some(275),
            is_booked: true,
        },
        CalendarEvent {
            uid: "mock-available-1".to_string(),
            summary: "Available".to_string(),
            description: String::new(),
            start: FeedTime::Instant(next_week + Duration::days(1)),
            end: FeedTime::Instant(next_week + Duration::days(2)),
            status: AVAILABLE_STATUS.to_string(),
            price: Some(250),
            is_booked: false,
        },
    ]
}
