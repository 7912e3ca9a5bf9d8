//! Human-readable schedule labels.
//!
//! Every function here is pure: the same schedule and reference date always
//! produce the same string.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{weekday_abbrev, WEEKDAY_ABBREVS};
use crate::schedule::{RepeatKind, Schedule};
use crate::search::DEFAULT_NEXT_HORIZON_DAYS;

/// Default separator between summary parts.
pub const DEFAULT_SEPARATOR: &str = " · ";

/// Next-due dates closer than this are shown as a weekday name.
const WEEKDAY_WINDOW_DAYS: i64 = 7;

/// Short label for the recurrence pattern, e.g. `"Weekdays"` or `"Mon/Wed"`.
///
/// Returns an empty string when the schedule has no recognizable pattern.
pub fn schedule_label(schedule: &Schedule) -> String {
    let Some(repeat) = schedule.repeat else {
        return String::new();
    };
    match repeat {
        RepeatKind::Daily => "Daily".to_string(),
        RepeatKind::Weekdays => "Weekdays".to_string(),
        RepeatKind::Weekends => "Weekends".to_string(),
        RepeatKind::CustomWeekdays => {
            if schedule.days_of_week.is_empty() {
                return "Custom days".to_string();
            }
            // BTreeSet iterates in ascending order
            schedule
                .days_of_week
                .iter()
                .filter_map(|d| WEEKDAY_ABBREVS.get(*d as usize))
                .copied()
                .collect::<Vec<_>>()
                .join("/")
        }
        RepeatKind::IntervalDays => match schedule.interval() {
            Some(1) => "Daily".to_string(),
            Some(n) => format!("Every {n} days"),
            None => String::new(),
        },
    }
}

/// Compact chip text. Same wording as [`schedule_label`], without dates.
pub fn repeat_badge(schedule: &Schedule) -> String {
    schedule_label(schedule)
}

/// `"Jan 5"`, or `"Jan 5, 2025"` when the year differs from `reference`.
pub fn display_date(date: NaiveDate, reference: NaiveDate) -> String {
    if date.year() == reference.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatter {
    /// Joins the parts of a schedule summary
    pub separator: String,
    /// Forward search horizon for the next-due label
    pub next_horizon_days: u32,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            next_horizon_days: DEFAULT_NEXT_HORIZON_DAYS,
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    /// Label plus start and end phrasing, e.g.
    /// `"Weekdays · Started Jan 1 · Ends Mar 31"`.
    pub fn schedule_summary(&self, schedule: &Schedule, reference: NaiveDate) -> String {
        let mut parts = Vec::with_capacity(3);

        let label = schedule_label(schedule);
        if !label.is_empty() {
            parts.push(label);
        }
        if let Some(start) = schedule.start_date {
            let verb = if start >= reference { "Starts" } else { "Started" };
            parts.push(format!("{verb} {}", display_date(start, reference)));
        }
        if let Some(end) = schedule.end_date {
            parts.push(format!("Ends {}", display_date(end, reference)));
        }

        parts.join(&self.separator)
    }

    /// When the commitment is next due, relative to `reference`.
    pub fn next_due_label(&self, schedule: &Schedule, reference: NaiveDate) -> String {
        if schedule.end_date.is_some_and(|end| reference > end) {
            return "Ended".to_string();
        }
        if let Some(start) = schedule.start_date {
            if reference < start {
                return format!("Starts {}", display_date(start, reference));
            }
        }

        match schedule.next_due_date(reference, self.next_horizon_days) {
            Some(next) if next == reference => "Due today".to_string(),
            Some(next) if (next - reference).num_days() < WEEKDAY_WINDOW_DAYS => {
                format!("Next due: {}", weekday_abbrev(next))
            }
            Some(next) => format!("Next due: {}", display_date(next, reference)),
            None if self.ends_within_horizon(schedule, reference) => "Ended".to_string(),
            None => "No upcoming".to_string(),
        }
    }

    /// `"Ended Jan 5"`, or plain `"Ended"` when there is no end date.
    pub fn ended_label(&self, schedule: &Schedule, reference: NaiveDate) -> String {
        match schedule.end_date {
            Some(end) => format!("Ended {}", display_date(end, reference)),
            None => "Ended".to_string(),
        }
    }

    fn ends_within_horizon(&self, schedule: &Schedule, reference: NaiveDate) -> bool {
        schedule
            .end_date
            .is_some_and(|end| (end - reference).num_days() <= i64::from(self.next_horizon_days))
    }
}
