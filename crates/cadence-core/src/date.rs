//! Canonical local calendar dates.
//!
//! Every date crossing the library boundary is a `YYYY-MM-DD` string with no
//! time-zone component. Internally dates are [`NaiveDate`] values, so
//! arithmetic only ever touches year/month/day and is independent of the
//! evaluating machine's UTC offset.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::ValidationError;

/// Canonical serialization pattern.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekday abbreviations indexed by weekday number (0 = Sunday).
pub const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a canonical `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for anything that is not exactly
/// a ten-character calendar date.
pub fn parse_local_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(ValidationError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_local_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The machine's current local calendar date.
///
/// Only call this at the outermost layer and pass the result down.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Weekday number with Sunday = 0 through Saturday = 6.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Abbreviated weekday name (`"Mon"`).
pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    WEEKDAY_ABBREVS[weekday_number(date) as usize]
}

/// Reduce a legacy completion entry to the calendar day it names.
///
/// Accepts either a bare date or a timestamp such as
/// `2024-01-05T18:30:00.000Z`. The written date prefix is taken as-is and is
/// never converted through a time zone.
pub fn legacy_entry_date(entry: &str) -> Option<NaiveDate> {
    let trimmed = entry.trim();
    let prefix = trimmed.get(..10)?;
    let date = NaiveDate::parse_from_str(prefix, ISO_DATE_FORMAT).ok()?;
    match trimmed.as_bytes().get(10) {
        None | Some(b'T') | Some(b't') | Some(b' ') => Some(date),
        Some(_) => None,
    }
}
