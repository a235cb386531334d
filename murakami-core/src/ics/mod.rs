//! iCal feed parsing.
//!
//! Provider exports are treated as loosely structured text: only the handful
//! of VEVENT properties the availability table needs are read, and anything
//! missing or unrecognized falls back to a default instead of failing.

mod date;
mod parse;

pub use date::normalize_date;
pub use parse::parse_feed;
