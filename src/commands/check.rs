use anyhow::Result;
use chrono::{NaiveDate, Utc};
use murakami_core::availability::day_status;
use murakami_core::window::ForwardWindow;

use super::load_entries;
use crate::render::Render;

pub async fn run(date: &str, mock: bool) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", date))?;

    let now = Utc::now();
    let window = ForwardWindow::six_months_from(now);
    if !window.contains(date) {
        anyhow::bail!(
            "{} is outside the availability window ({} to {})",
            date,
            window.from.date_naive(),
            window.to.date_naive()
        );
    }

    let (entries, pricing) = load_entries(mock, now).await?;
    println!("{}", day_status(date, &entries, &pricing).render());

    Ok(())
}
