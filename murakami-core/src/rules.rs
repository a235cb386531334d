//! Ordered heuristics applied to free-text event fields.
//!
//! Both lists are evaluated top to bottom and the order is part of the
//! contract: the first matching price rule wins, even when a later rule
//! would also match.

use std::sync::LazyLock;

use regex::Regex;

/// Case-insensitive substrings that mark an event as a booking.
pub const BOOKING_KEYWORDS: [&str; 5] = [
    "booked",
    "unavailable",
    "reserved",
    "not available",
    "blocked",
];

/// A named pattern whose first capture group is the nightly price.
pub struct PriceRule {
    pub name: &'static str,
    pattern: Regex,
}

impl PriceRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        PriceRule {
            name,
            pattern: Regex::new(pattern).expect("Invalid price pattern"),
        }
    }

    /// The captured amount, if the rule matches and the amount fits in a `u32`.
    pub fn apply(&self, text: &str) -> Option<u32> {
        let caps = self.pattern.captures(text)?;
        caps.get(1)?.as_str().parse().ok()
    }
}

static PRICE_RULES: LazyLock<Vec<PriceRule>> = LazyLock::new(|| {
    vec![
        PriceRule::new("dollar-amount", r"\$(\d+)"),
        PriceRule::new("price-label", r"(?i)Price: \$(\d+)"),
        PriceRule::new("usd-suffix", r"(?i)(\d+) USD"),
        PriceRule::new("rate-label", r"(?i)Rate: \$(\d+)"),
        PriceRule::new("cost-label", r"(?i)Cost: \$(\d+)"),
        PriceRule::new("per-night", r"(?i)(\d+) per night"),
        PriceRule::new("night-label", r"(?i)Night: \$(\d+)"),
    ]
});

/// Price rules in evaluation order.
pub fn price_rules() -> &'static [PriceRule] {
    &PRICE_RULES
}

/// Whether summary or description names the event as a booking.
pub fn is_booking(summary: &str, description: &str) -> bool {
    let summary = summary.to_lowercase();
    let description = description.to_lowercase();

    BOOKING_KEYWORDS
        .iter()
        .any(|keyword| summary.contains(keyword) || description.contains(keyword))
}

/// Apply the price rules to one text field. No bounds check on the result.
pub fn extract_price(text: &str) -> Option<u32> {
    price_rules().iter().find_map(|rule| rule.apply(text))
}

/// Price hint for a non-booking event: description first, then summary.
/// A zero amount counts as no price.
pub fn infer_price(description: &str, summary: &str) -> Option<u32> {
    extract_price(description)
        .filter(|price| *price != 0)
        .or_else(|| extract_price(summary).filter(|price| *price != 0))
}
