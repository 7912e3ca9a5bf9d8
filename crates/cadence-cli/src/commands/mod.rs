pub mod config;
pub mod record;
pub mod schedule;
pub mod streak;

use chrono::NaiveDate;

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    cadence_core::parse_local_date(value).map_err(|e| e.to_string())
}

/// The explicit date argument, or the local calendar date.
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(cadence_core::today_local)
}
