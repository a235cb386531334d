pub mod availability;
pub mod check;

use anyhow::Result;
use chrono::{DateTime, Utc};
use murakami_core::CalendarEvent;
use murakami_core::config::MurakamiConfig;
use murakami_core::fallback::mock_events;
use murakami_core::feed::Synthesizer;
use murakami_core::pricing::PricingRules;

use crate::utils::tui::create_spinner;

/// Entries for the window starting at `now`, from the feed or the fallback set.
pub async fn load_entries(mock: bool, now: DateTime<Utc>) -> Result<(Vec<CalendarEvent>, PricingRules)> {
    let config = MurakamiConfig::load()?;

    if mock {
        return Ok((mock_events(now), config.pricing));
    }

    let synthesizer = Synthesizer::from_config(&config)?;

    let spinner = create_spinner(format!("Fetching {}", synthesizer.source().describe()));
    let result = synthesizer.availability(now).await;
    spinner.finish_and_clear();

    Ok((result?, config.pricing))
}
