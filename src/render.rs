//! Colored terminal rendering for availability records.

use chrono::NaiveDate;
use murakami_core::{AvailabilityDay, DayStatus};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayStatus {
    fn render(&self) -> String {
        let label = format!("{:<9}", self.to_string());
        match self {
            DayStatus::Available => label.green().to_string(),
            DayStatus::Booked => label.red().to_string(),
        }
    }
}

impl Render for AvailabilityDay {
    fn render(&self) -> String {
        let date = self.date.format("%a %b %d").to_string();
        let price = match self.price {
            Some(price) => format!("${}", price),
            None => String::new(),
        };
        format!("{} {} {}", date, self.status.render(), price.dimmed())
    }
}

pub fn render_month_heading(date: NaiveDate) -> String {
    date.format("%B %Y").to_string().bold().to_string()
}

pub fn render_summary(days: &[AvailabilityDay]) -> String {
    let booked = days.iter().filter(|d| d.status == DayStatus::Booked).count();
    let available = days.len() - booked;
    format!(
        "{} days: {} available, {} booked",
        days.len(),
        available.green(),
        booked.red()
    )
}
