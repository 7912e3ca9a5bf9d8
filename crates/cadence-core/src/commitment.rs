//! A recurring commitment: one schedule, its compliance record and an
//! optional historical best streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionRecord;
use crate::error::Result;
use crate::schedule::{optional_schedule, Schedule};
use crate::streak::{StreakCalculator, StreakSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    /// Recurrence rule. `None` means "no active schedule".
    #[serde(default, deserialize_with = "optional_schedule")]
    pub schedule: Option<Schedule>,
    #[serde(default, alias = "completedDates")]
    pub completions: CompletionRecord,
    /// Best streak carried over from history that predates `completions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_streak_baseline: Option<u32>,
}

impl Commitment {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..Self::default()
        }
    }

    pub fn with_completions(self, completions: CompletionRecord) -> Self {
        Self {
            completions,
            ..self
        }
    }

    pub fn with_best_streak_baseline(self, baseline: u32) -> Self {
        Self {
            best_streak_baseline: Some(baseline),
            ..self
        }
    }

    /// Decode a commitment from JSON.
    ///
    /// # Errors
    ///
    /// Fails only when the text is not JSON or not an object; malformed fields
    /// inside decode leniently.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty JSON in the canonical shape.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.schedule.as_ref().is_some_and(|s| s.is_due_on(date))
    }

    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        StreakCalculator::new().current_streak(self, today)
    }

    pub fn best_streak(&self, horizon_days: u32) -> u32 {
        StreakCalculator::with_horizon(horizon_days).best_streak(self)
    }

    pub fn streak_summary(&self, today: NaiveDate, horizon_days: u32) -> StreakSummary {
        StreakCalculator::with_horizon(horizon_days).summary(self, today)
    }
}
