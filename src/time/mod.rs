//! Date and time helpers.

pub mod ticker;

use chrono::{Datelike, FixedOffset, NaiveDate};
use std::time::Duration;
use tokio::time::sleep;

/// Japan Standard Time (UTC+9).
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 60 * 60).expect("UTC+9 is a valid offset")
}

/// Wait the given number of seconds.
pub async fn wait_secs(secs: u64) {
    sleep(Duration::from_secs(secs)).await;
}

/// Wait the given number of milliseconds.
pub async fn wait_millis(millis: u64) {
    sleep(Duration::from_millis(millis)).await;
}

/// Whether the given date is the first day of its month.
pub fn is_first_day_of_month(date: NaiveDate) -> bool {
    date.day() == 1
}

/// Whether the given date is the last day of its month. Last day of month
/// when the next day is the 1st.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map(|tomorrow| tomorrow.day() == 1).unwrap_or(false)
}
