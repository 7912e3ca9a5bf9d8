//! Recurrence rules and the due-date evaluator.
//!
//! A [`Schedule`] is an immutable value: editing a rule means building a new
//! one. Evaluation is total. A schedule with no start date, an unknown repeat
//! kind, an empty custom weekday set or a malformed interval is simply never
//! due.

mod lenient;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::weekday_number;
use crate::error::ValidationError;

pub(crate) use lenient::optional_schedule;

/// Supported recurrence patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepeatKind {
    /// Every day
    Daily,
    /// Monday through Friday
    Weekdays,
    /// Saturday and Sunday
    Weekends,
    /// An explicit set of weekdays
    #[serde(alias = "CUSTOM_DOW")]
    CustomWeekdays,
    /// Every N days counted from the start date
    IntervalDays,
}

impl RepeatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatKind::Daily => "DAILY",
            RepeatKind::Weekdays => "WEEKDAYS",
            RepeatKind::Weekends => "WEEKENDS",
            RepeatKind::CustomWeekdays => "CUSTOM_WEEKDAYS",
            RepeatKind::IntervalDays => "INTERVAL_DAYS",
        }
    }
}

impl fmt::Display for RepeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(RepeatKind::Daily),
            "WEEKDAYS" => Ok(RepeatKind::Weekdays),
            "WEEKENDS" => Ok(RepeatKind::Weekends),
            "CUSTOM_WEEKDAYS" | "CUSTOM_DOW" => Ok(RepeatKind::CustomWeekdays),
            "INTERVAL_DAYS" => Ok(RepeatKind::IntervalDays),
            _ => Err(ValidationError::UnknownRepeatKind),
        }
    }
}

/// A declarative recurrence rule.
///
/// Deserialization is lenient (see the `lenient` module): malformed fields
/// decode to values that make the schedule "not due" instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Recurrence kind. `None` when missing or unrecognized.
    #[serde(default, alias = "repeatKind", deserialize_with = "lenient::repeat_kind")]
    pub repeat: Option<RepeatKind>,
    /// Weekday numbers, 0 (Sun) through 6 (Sat). Only read for custom weekdays.
    #[serde(default, deserialize_with = "lenient::days_of_week")]
    pub days_of_week: BTreeSet<u8>,
    /// Interval anchor for [`RepeatKind::IntervalDays`]. `None` when the
    /// stored value was not a number.
    #[serde(
        default = "default_interval_days",
        deserialize_with = "lenient::interval_days",
        serialize_with = "lenient::serialize_interval_days"
    )]
    pub interval_days: Option<u32>,
    /// Inclusive lower bound. Without it the schedule is never due.
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound. `None` means unbounded.
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub end_date: Option<NaiveDate>,
}

fn default_interval_days() -> Option<u32> {
    Some(1)
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            repeat: None,
            days_of_week: BTreeSet::new(),
            interval_days: default_interval_days(),
            start_date: None,
            end_date: None,
        }
    }
}

impl Schedule {
    fn starting(repeat: RepeatKind, start_date: NaiveDate) -> Self {
        Self {
            repeat: Some(repeat),
            start_date: Some(start_date),
            ..Self::default()
        }
    }

    pub fn daily(start_date: NaiveDate) -> Self {
        Self::starting(RepeatKind::Daily, start_date)
    }

    pub fn weekdays(start_date: NaiveDate) -> Self {
        Self::starting(RepeatKind::Weekdays, start_date)
    }

    pub fn weekends(start_date: NaiveDate) -> Self {
        Self::starting(RepeatKind::Weekends, start_date)
    }

    /// Custom weekday set. Numbers outside 0..=6 are dropped.
    pub fn custom_weekdays(start_date: NaiveDate, days: impl IntoIterator<Item = u8>) -> Self {
        Self {
            days_of_week: days.into_iter().filter(|d| *d <= 6).collect(),
            ..Self::starting(RepeatKind::CustomWeekdays, start_date)
        }
    }

    pub fn every_n_days(start_date: NaiveDate, interval_days: u32) -> Self {
        Self {
            interval_days: Some(interval_days),
            ..Self::starting(RepeatKind::IntervalDays, start_date)
        }
    }

    /// Copy of this schedule bounded by `end_date`.
    pub fn with_end_date(self, end_date: NaiveDate) -> Self {
        Self {
            end_date: Some(end_date),
            ..self
        }
    }

    /// Effective interval, clamped to at least 1.
    pub fn interval(&self) -> Option<u32> {
        self.interval_days.map(|n| n.max(1))
    }

    /// True iff `date` lies within `[start_date, end_date]`.
    ///
    /// A schedule without a start date is never in range.
    pub fn is_within_range(&self, date: NaiveDate) -> bool {
        let Some(start) = self.start_date else {
            return false;
        };
        if date < start {
            return false;
        }
        match self.end_date {
            Some(end) => date <= end,
            None => true,
        }
    }

    /// Whether the commitment should be performed on `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        if !self.is_within_range(date) {
            return false;
        }
        let Some(repeat) = self.repeat else {
            return false;
        };

        let weekday = weekday_number(date);
        match repeat {
            RepeatKind::Daily => true,
            RepeatKind::Weekdays => (1..=5).contains(&weekday),
            RepeatKind::Weekends => weekday == 0 || weekday == 6,
            RepeatKind::CustomWeekdays => self.days_of_week.contains(&weekday),
            RepeatKind::IntervalDays => {
                let (Some(interval), Some(start)) = (self.interval(), self.start_date) else {
                    return false;
                };
                (date - start).num_days() % i64::from(interval) == 0
            }
        }
    }

    /// Report problems an editor may want to surface.
    ///
    /// Evaluation never calls this; an invalid schedule is just never due.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let repeat = self.repeat.ok_or(ValidationError::UnknownRepeatKind)?;
        let start = self.start_date.ok_or(ValidationError::MissingStartDate)?;
        if let Some(end) = self.end_date {
            if end < start {
                return Err(ValidationError::InvalidDateRange { start, end });
            }
        }
        match repeat {
            RepeatKind::CustomWeekdays if self.days_of_week.is_empty() => {
                Err(ValidationError::NoDaysSelected)
            }
            RepeatKind::IntervalDays if self.interval_days.is_none() => {
                Err(ValidationError::MalformedInterval)
            }
            _ => Ok(()),
        }
    }
}
