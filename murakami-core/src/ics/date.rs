use chrono::{NaiveDate, NaiveDateTime};

use crate::event::FeedTime;

/// Normalize a DTSTART/DTEND value.
///
/// - `YYYYMMDD` becomes noon UTC on that day
/// - `YYYYMMDDTHHMMSS[Z]` becomes that instant, read as UTC
/// - anything else is kept verbatim as [`FeedTime::Raw`]
pub fn normalize_date(value: &str) -> FeedTime {
    if value.len() == 8 {
        if let Some(noon) = NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(12, 0, 0))
        {
            return FeedTime::Instant(noon.and_utc());
        }
    } else if value.contains('T') {
        let without_zone = value.strip_suffix('Z').unwrap_or(value);
        if let Ok(dt) = NaiveDateTime::parse_from_str(without_zone, "%Y%m%dT%H%M%S") {
            return FeedTime::Instant(dt.and_utc());
        }
    }

    FeedTime::Raw(value.to_string())
}
