//! The forward window over which availability is computed.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

/// Length of the forward window in calendar months.
pub const FORWARD_WINDOW_MONTHS: u32 = 6;

/// Inclusive range of instants, one per day, starting at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ForwardWindow {
    /// `now` through six calendar months later.
    ///
    /// Month arithmetic clamps to the end of shorter months, so 31 August
    /// runs to the last day of February.
    pub fn six_months_from(now: DateTime<Utc>) -> Self {
        let to = now
            .checked_add_months(Months::new(FORWARD_WINDOW_MONTHS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        ForwardWindow { from: now, to }
    }

    /// One instant per day, keeping `from`'s time of day, up to and including `to`.
    pub fn days(&self) -> impl Iterator<Item = DateTime<Utc>> + use<> {
        let to = self.to;
        std::iter::successors(Some(self.from), |d| d.checked_add_signed(Duration::days(1)))
            .take_while(move |d| *d <= to)
    }

    /// Whether `date` is one of the window's days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.date_naive() <= date && date <= self.to.date_naive()
    }
}
