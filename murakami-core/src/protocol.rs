//! JSON payload served at `/api/calendar` and printed by `murakami availability --json`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::event::{CalendarEvent, DayStatus, FeedTime};

/// One entry as the listing page consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookedDate {
    pub uid: String,
    pub summary: String,
    pub start: FeedTime,
    pub end: FeedTime,
    pub status: DayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl From<&CalendarEvent> for BookedDate {
    fn from(event: &CalendarEvent) -> Self {
        BookedDate {
            uid: event.uid.clone(),
            summary: event.summary.clone(),
            start: event.start.clone(),
            end: event.end.clone(),
            status: DayStatus::of(event),
            price: event.price.filter(|_| !event.is_booked),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub booked_dates: Vec<BookedDate>,
    pub last_updated: String,
}

impl CalendarResponse {
    /// Entries sorted ascending by start. Starts that cannot be read as a
    /// date go last, keeping their relative order.
    pub fn from_entries(entries: &[CalendarEvent], now: DateTime<Utc>) -> Self {
        let mut booked_dates: Vec<BookedDate> = entries.iter().map(BookedDate::from).collect();
        booked_dates.sort_by_key(|d| {
            let start = d.start.instant();
            (start.is_none(), start)
        });

        CalendarResponse {
            booked_dates,
            last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
