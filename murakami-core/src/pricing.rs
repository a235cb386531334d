//! Nightly rates for synthesized available days.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const BASE_PRICE: u32 = 250;
/// Added on Friday and Saturday nights.
pub const WEEKEND_PREMIUM: u32 = 50;

/// Extra charge for every night in a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    /// 1 = January
    pub month: u32,
    pub premium: u32,
}

fn default_seasonal() -> Vec<SeasonalAdjustment> {
    [(6, 25), (7, 50), (8, 50), (11, 25), (12, 75)]
        .into_iter()
        .map(|(month, premium)| SeasonalAdjustment { month, premium })
        .collect()
}

fn default_base() -> u32 {
    BASE_PRICE
}

fn default_weekend_premium() -> u32 {
    WEEKEND_PREMIUM
}

/// Additive pricing: base, plus weekend premium, plus seasonal premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    #[serde(default = "default_base")]
    pub base: u32,
    #[serde(default = "default_weekend_premium")]
    pub weekend_premium: u32,
    #[serde(default = "default_seasonal")]
    pub seasonal: Vec<SeasonalAdjustment>,
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            base: BASE_PRICE,
            weekend_premium: WEEKEND_PREMIUM,
            seasonal: default_seasonal(),
        }
    }
}

impl PricingRules {
    pub fn price_for(&self, date: NaiveDate) -> u32 {
        let weekend = match date.weekday() {
            Weekday::Fri | Weekday::Sat => self.weekend_premium,
            _ => 0,
        };
        self.base
            .saturating_add(weekend)
            .saturating_add(self.seasonal_premium(date.month()))
    }

    fn seasonal_premium(&self, month: u32) -> u32 {
        self.seasonal
            .iter()
            .find(|s| s.month == month)
            .map_or(0, |s| s.premium)
    }
}
