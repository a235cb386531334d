use anyhow::Result;
use chrono::Utc;
use murakami_core::availability::daily_view;
use murakami_core::protocol::CalendarResponse;
use murakami_core::window::ForwardWindow;

use super::load_entries;
use crate::render::{Render, render_month_heading, render_summary};

pub async fn run(mock: bool, json: bool) -> Result<()> {
    let now = Utc::now();
    let (entries, pricing) = load_entries(mock, now).await?;

    if json {
        let response = CalendarResponse::from_entries(&entries, now);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let window = ForwardWindow::six_months_from(now);
    let days = daily_view(&entries, &window, &pricing);

    let mut current_month = None;
    for day in &days {
        let heading = render_month_heading(day.date);
        if current_month.as_ref() != Some(&heading) {
            if current_month.is_some() {
                println!();
            }
            println!("{}", heading);
            current_month = Some(heading);
        }
        println!("  {}", day.render());
    }

    println!();
    println!("{}", render_summary(&days));

    Ok(())
}
