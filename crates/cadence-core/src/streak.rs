//! Current and best compliance streaks.
//!
//! A streak counts consecutive *due* occurrences with recorded compliance.
//! Days on which the schedule is not due neither extend nor break a streak.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commitment::Commitment;
use crate::search::DEFAULT_PREV_HORIZON_DAYS;

/// Current and best streak for one commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive compliant due dates ending at or before the reference date
    pub current: u32,
    /// Longest run ever observed, never below the persisted baseline
    pub best: u32,
}

/// Streak calculator
#[derive(Debug, Clone)]
pub struct StreakCalculator {
    /// How far back to look for the previous due date of an occurrence
    pub horizon_days: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_PREV_HORIZON_DAYS,
        }
    }
}

impl StreakCalculator {
    /// Create a new calculator with the default horizon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom backward search horizon
    pub fn with_horizon(horizon_days: u32) -> Self {
        Self { horizon_days }
    }

    /// Count consecutive compliant due dates ending at or before `today`.
    ///
    /// If today is due but not yet marked, counting starts from the previous
    /// due date, so an open day does not break the streak before it is over.
    pub fn current_streak(&self, commitment: &Commitment, today: NaiveDate) -> u32 {
        let Some(schedule) = commitment.schedule.as_ref() else {
            return 0;
        };
        let completions = &commitment.completions;

        let mut cursor = if schedule.is_due_on(today) && completions.is_compliant(today) {
            Some(today)
        } else {
            schedule.prev_due_date(today, self.horizon_days)
        };

        let mut streak = 0;
        while let Some(date) = cursor {
            if !completions.is_compliant(date) {
                break;
            }
            streak += 1;
            cursor = schedule.prev_due_date(date, self.horizon_days);
        }
        streak
    }

    /// Longest run of consecutive compliant due dates in the record, merged
    /// with the commitment's persisted baseline.
    pub fn best_streak(&self, commitment: &Commitment) -> u32 {
        let baseline = commitment.best_streak_baseline.unwrap_or(0);
        let Some(schedule) = commitment.schedule.as_ref() else {
            return baseline;
        };

        // Run length ending at each compliant due date. Dates come out of the
        // record in ascending order, so a predecessor is always filled in first.
        let mut runs: HashMap<NaiveDate, u32> = HashMap::new();
        let mut best = 0;

        for date in commitment
            .completions
            .iter_compliant()
            .filter(|date| schedule.is_due_on(*date))
        {
            let run = schedule
                .prev_due_date(date, self.horizon_days)
                .and_then(|prev| runs.get(&prev))
                .map_or(1, |prev_run| prev_run + 1);
            runs.insert(date, run);
            best = best.max(run);
        }

        baseline.max(best)
    }

    /// Both streaks. `best` is never lower than `current`.
    pub fn summary(&self, commitment: &Commitment, today: NaiveDate) -> StreakSummary {
        let current = self.current_streak(commitment, today);
        let best = self.best_streak(commitment).max(current);
        StreakSummary { current, best }
    }
}
