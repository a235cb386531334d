//! Availability synthesis for a single vacation-rental property.
//!
//! The crate turns a booking provider's iCal export into a dense per-day
//! availability and price table:
//! - `ics` parses raw VEVENT text into [`CalendarEvent`]s
//! - `rules` holds the ordered booking-keyword and price-pattern lists
//! - `availability` expands parsed events over the forward window
//! - `feed` fetches the raw text and ties the steps together
//! - `fallback` supplies fixed data when the feed is unreachable

pub mod availability;
pub mod config;
pub mod error;
pub mod event;
pub mod fallback;
pub mod feed;
pub mod ics;
pub mod pricing;
pub mod protocol;
pub mod rules;
pub mod window;

pub use error::{FeedError, FeedResult};
pub use event::*;
