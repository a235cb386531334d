//! Expansion of parsed events into the forward availability table.
//!
//! All functions here are pure: the reference time is a parameter, so the
//! same events and the same `now` always give the same table.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::event::{AVAILABLE_STATUS, AvailabilityDay, CalendarEvent, DayStatus, FeedTime};
use crate::pricing::PricingRules;
use crate::window::ForwardWindow;

/// Whether any booking event covers `date` (start inclusive, end exclusive).
pub fn is_date_booked(date: NaiveDate, events: &[CalendarEvent]) -> bool {
    events.iter().any(|e| e.is_booked && e.covers(date))
}

/// Feed events followed by one synthesized available entry per free day.
///
/// The parsed events are passed through first, in feed order. After them
/// come the synthesized days in date order. Callers that need chronological
/// order must sort.
pub fn expand(
    events: Vec<CalendarEvent>,
    now: DateTime<Utc>,
    pricing: &PricingRules,
) -> Vec<CalendarEvent> {
    let window = ForwardWindow::six_months_from(now);

    let synthesized: Vec<CalendarEvent> = window
        .days()
        .filter(|day| !is_date_booked(day.date_naive(), &events))
        .map(|day| available_day(day, pricing))
        .collect();

    let mut result = events;
    result.extend(synthesized);
    result
}

fn available_day(start: DateTime<Utc>, pricing: &PricingRules) -> CalendarEvent {
    let date = start.date_naive();
    CalendarEvent {
        uid: format!("available-{}", date.format("%Y-%m-%d")),
        summary: "Available".to_string(),
        description: String::new(),
        start: FeedTime::Instant(start),
        end: FeedTime::Instant(start + Duration::days(1)),
        status: AVAILABLE_STATUS.to_string(),
        price: Some(pricing.price_for(date)),
        is_booked: false,
    }
}

/// Look up one date in an expanded entry list.
///
/// An available date takes the price of the first non-booking entry that
/// starts on it, or the computed rate when there is none.
pub fn day_status(date: NaiveDate, entries: &[CalendarEvent], pricing: &PricingRules) -> AvailabilityDay {
    if is_date_booked(date, entries) {
        return AvailabilityDay {
            date,
            status: DayStatus::Booked,
            price: None,
        };
    }

    let price = entries
        .iter()
        .filter(|e| !e.is_booked && e.start.day() == Some(date))
        .find_map(|e| e.price)
        .unwrap_or_else(|| pricing.price_for(date));

    AvailabilityDay {
        date,
        status: DayStatus::Available,
        price: Some(price),
    }
}

/// Dense table with exactly one record per day of `window`.
pub fn daily_view(
    entries: &[CalendarEvent],
    window: &ForwardWindow,
    pricing: &PricingRules,
) -> Vec<AvailabilityDay> {
    window
        .days()
        .map(|day| day_status(day.date_naive(), entries, pricing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DEFAULT_STATUS;
    use crate::ics::parse_feed;
    use chrono::{Datelike, TimeZone, Weekday};
    use indoc::indoc;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(uid: &str, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            uid: uid.to_string(),
            summary: "Reserved".to_string(),
            description: String::new(),
            start: crate::ics::normalize_date(start),
            end: crate::ics::normalize_date(end),
            status: DEFAULT_STATUS.to_string(),
            price: None,
            is_booked: true,
        }
    }

    #[test]
    fn half_open_interval() {
        let events = vec![booking("stay", "20250610", "20250613")];
        assert!(!is_date_booked(date(2025, 6, 9), &events));
        assert!(is_date_booked(date(2025, 6, 10), &events));
        assert!(is_date_booked(date(2025, 6, 11), &events));
        assert!(is_date_booked(date(2025, 6, 12), &events));
        assert!(!is_date_booked(date(2025, 6, 13), &events));
    }

    #[test]
    fn non_booking_events_never_book_a_date() {
        let mut open = booking("open", "20250610", "20250613");
        open.is_booked = false;
        assert!(!is_date_booked(date(2025, 6, 11), &[open]));
    }

    #[test]
    fn booked_events_pass_through_first() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let events = vec![booking("stay", "20250610", "20250613")];
        let expanded = expand(events.clone(), now, &PricingRules::default());

        assert_eq!(expanded[0], events[0]);
        assert!(expanded[1..].iter().all(|e| !e.is_booked));
        assert_eq!(expanded[1].uid, "available-2025-06-01");
        assert_eq!(expanded[1].start.to_string(), "2025-06-01T08:00:00.000Z");
        assert_eq!(expanded[1].end.to_string(), "2025-06-02T08:00:00.000Z");
        assert_eq!(expanded[1].status, "AVAILABLE");
    }

    #[test]
    fn booked_days_are_not_synthesized() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let expanded = expand(
            vec![booking("stay", "20250610", "20250613")],
            now,
            &PricingRules::default(),
        );
        let uids: BTreeSet<_> = expanded.iter().map(|e| e.uid.as_str()).collect();
        assert!(uids.contains("available-2025-06-09"));
        assert!(!uids.contains("available-2025-06-10"));
        assert!(!uids.contains("available-2025-06-12"));
        assert!(uids.contains("available-2025-06-13"));
    }

    #[test]
    fn every_window_day_is_accounted_for_once() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 17, 45, 0).unwrap();
        let events = vec![
            booking("a", "20250601", "20250608"),
            booking("b", "20250605", "20250610"),
            booking("before-window", "20250101", "20250521"),
        ];
        let expanded = expand(events.clone(), now, &PricingRules::default());
        let window = ForwardWindow::six_months_from(now);
        let all_days: BTreeSet<NaiveDate> = window.days().map(|d| d.date_naive()).collect();

        let synthesized: Vec<NaiveDate> = expanded[events.len()..]
            .iter()
            .filter_map(|e| e.start.day())
            .collect();
        let unique: BTreeSet<NaiveDate> = synthesized.iter().copied().collect();
        assert_eq!(unique.len(), synthesized.len(), "duplicate synthesized dates");

        let covered: BTreeSet<NaiveDate> = all_days
            .iter()
            .copied()
            .filter(|d| is_date_booked(*d, &events))
            .collect();
        assert!(unique.is_disjoint(&covered));

        let accounted: BTreeSet<NaiveDate> = unique.union(&covered).copied().collect();
        assert_eq!(accounted, all_days);
        assert!(covered.contains(&date(2025, 5, 20)));
        assert!(!covered.contains(&date(2025, 5, 21)));
    }

    #[test]
    fn july_saturday_price() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let expanded = expand(Vec::new(), now, &PricingRules::default());
        let saturday = expanded
            .iter()
            .find(|e| e.start.day() == Some(date(2025, 7, 12)))
            .unwrap();
        assert_eq!(saturday.start.day().unwrap().weekday(), Weekday::Sat);
        assert_eq!(saturday.price, Some(350));
    }

    #[test]
    fn expansion_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap();
        let events = parse_feed(indoc! {"
            BEGIN:VEVENT
            DTSTART;VALUE=DATE:20250310
            DTEND;VALUE=DATE:20250314
            SUMMARY:Reserved
            END:VEVENT
        "});
        let first = expand(events.clone(), now, &PricingRules::default());
        let second = expand(events, now, &PricingRules::default());
        assert_eq!(first, second);
    }

    #[test]
    fn daily_view_prefers_feed_price() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let events = parse_feed(indoc! {"
            BEGIN:VEVENT
            DTSTART;VALUE=DATE:20250603
            DTEND;VALUE=DATE:20250604
            SUMMARY:Available - $199
            END:VEVENT
            BEGIN:VEVENT
            DTSTART;VALUE=DATE:20250605
            DTEND;VALUE=DATE:20250607
            SUMMARY:Blocked
            END:VEVENT
        "});
        let pricing = PricingRules::default();
        let expanded = expand(events, now, &pricing);
        let window = ForwardWindow::six_months_from(now);
        let days = daily_view(&expanded, &window, &pricing);

        assert_eq!(days.len(), window.days().count());
        assert_eq!(days[0].date, date(2025, 6, 1));

        let lookup = |d: NaiveDate| days.iter().find(|day| day.date == d).unwrap().clone();
        assert_eq!(lookup(date(2025, 6, 3)).price, Some(199));
        assert_eq!(lookup(date(2025, 6, 4)).price, Some(275));
        assert_eq!(lookup(date(2025, 6, 5)).status, DayStatus::Booked);
        assert_eq!(lookup(date(2025, 6, 5)).price, None);
        assert_eq!(lookup(date(2025, 6, 7)).status, DayStatus::Available);
    }
}
