//! Parsed feed events and the per-day availability records derived from them.
//!
//! Events are rebuilt from scratch on every fetch; nothing here is persisted.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

/// Status given to events without a STATUS line.
pub const DEFAULT_STATUS: &str = "CONFIRMED";

/// Status given to synthesized available days.
pub const AVAILABLE_STATUS: &str = "AVAILABLE";

/// A start or end value taken from a VEVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedTime {
    /// A recognized `YYYYMMDD` or `YYYYMMDDTHHMMSSZ` value, normalized to UTC.
    Instant(DateTime<Utc>),
    /// Any other value, passed through as it appeared in the feed.
    Raw(String),
}

impl FeedTime {
    /// The moment this value denotes, if it can be read as one.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            FeedTime::Instant(dt) => Some(*dt),
            FeedTime::Raw(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                }),
        }
    }

    /// Date-only key used for interval membership. Time of day is ignored.
    pub fn day(&self) -> Option<NaiveDate> {
        self.instant().map(|dt| dt.date_naive())
    }
}

impl fmt::Display for FeedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedTime::Instant(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            FeedTime::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for FeedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One VEVENT from the feed, or a synthesized available day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub start: FeedTime,
    pub end: FeedTime,
    /// Provider status string, e.g. "CONFIRMED"
    pub status: String,
    /// Nightly price, only inferred for events that are not bookings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    /// Classified once at parse time from summary and description
    pub is_booked: bool,
}

impl CalendarEvent {
    /// Whether `date` falls in `[start, end)` compared day by day.
    ///
    /// Events whose start or end cannot be read as a date cover nothing, and
    /// so does an event with `start > end`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match (self.start.day(), self.end.day()) {
            (Some(start), Some(end)) => start <= date && date < end,
            _ => false,
        }
    }
}

/// Two-valued status shown to guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Available,
    Booked,
}

impl DayStatus {
    pub fn of(event: &CalendarEvent) -> Self {
        if event.is_booked {
            DayStatus::Booked
        } else {
            DayStatus::Available
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Available => f.write_str("available"),
            DayStatus::Booked => f.write_str("booked"),
        }
    }
}

/// One calendar day in the forward window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    /// Absent when booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}
