//! VEVENT block extraction.

use icalendar::parser::unfold;
use tracing::debug;

use super::date::normalize_date;
use crate::event::{CalendarEvent, DEFAULT_STATUS};
use crate::rules::{infer_price, is_booking};

const BLOCK_DELIMITER: &str = "BEGIN:VEVENT";
const BLOCK_END: &str = "END:VEVENT";

/// Parse raw calendar text into events, in feed order.
///
/// Never fails: text with no VEVENT blocks yields an empty list, and a block
/// without both DTSTART and DTEND is skipped.
pub fn parse_feed(raw: &str) -> Vec<CalendarEvent> {
    let unfolded = unfold(raw);

    // Everything before the first delimiter is calendar metadata
    let blocks: Vec<&str> = unfolded.split(BLOCK_DELIMITER).skip(1).collect();

    let events: Vec<CalendarEvent> = blocks
        .iter()
        .enumerate()
        .filter_map(|(i, block)| parse_block(block, i + 1))
        .collect();

    debug!(
        blocks = blocks.len(),
        events = events.len(),
        dropped = blocks.len() - events.len(),
        "Parsed calendar feed"
    );

    events
}

/// Parse one block. `ordinal` is its 1-based position in the feed.
fn parse_block(block: &str, ordinal: usize) -> Option<CalendarEvent> {
    let block = match block.find(BLOCK_END) {
        Some(end) => &block[..end],
        None => block,
    };

    let start = field(block, "DTSTART")?;
    let end = field(block, "DTEND")?;

    let uid = field(block, "UID").unwrap_or_else(|| format!("event-{}", ordinal));
    let summary = field(block, "SUMMARY").unwrap_or_default();
    let description = field(block, "DESCRIPTION").unwrap_or_default();
    let status = field(block, "STATUS").unwrap_or_else(|| DEFAULT_STATUS.to_string());

    let is_booked = is_booking(&summary, &description);
    let price = if is_booked {
        None
    } else {
        infer_price(&description, &summary)
    };

    Some(CalendarEvent {
        uid,
        summary,
        description,
        start: normalize_date(&start),
        end: normalize_date(&end),
        status,
        price,
        is_booked,
    })
}

/// Value of the first line in `block` for property `name`.
///
/// Accepts both `NAME:value` and `NAME;PARAM=...:value`. Empty values count
/// as missing.
fn field(block: &str, name: &str) -> Option<String> {
    block.lines().find_map(|line| {
        let rest = line.strip_prefix(name)?;
        let value = match rest.chars().next()? {
            ':' => &rest[1..],
            ';' => rest.split_once(':')?.1,
            _ => return None,
        };
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
