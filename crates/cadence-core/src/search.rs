//! Bounded due-date search.
//!
//! Both directions are plain day-by-day scans capped by a horizon, so every
//! call terminates after at most `horizon_days + 1` evaluations.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::schedule::Schedule;

/// Default forward search horizon in days.
pub const DEFAULT_NEXT_HORIZON_DAYS: u32 = 60;

/// Default backward search horizon in days.
pub const DEFAULT_PREV_HORIZON_DAYS: u32 = 365;

impl Schedule {
    /// First due date on or after `from`, scanning at most `horizon_days`
    /// days past `from`.
    ///
    /// The scan starts at the later of `from` and the start date. Returns
    /// `None` when the end date is passed or the horizon runs out first.
    pub fn next_due_date(&self, from: NaiveDate, horizon_days: u32) -> Option<NaiveDate> {
        let start = self.start_date?;
        let limit = from
            .checked_add_signed(Duration::days(i64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut cursor = from.max(start);

        while cursor <= limit {
            if self.end_date.is_some_and(|end| cursor > end) {
                debug!(from = %from, "next due search passed end date");
                return None;
            }
            if self.is_due_on(cursor) {
                return Some(cursor);
            }
            cursor = cursor.succ_opt()?;
        }

        debug!(from = %from, horizon_days, "next due search exhausted horizon");
        None
    }

    /// Closest due date strictly before `from`, looking back at most
    /// `horizon_days` days.
    ///
    /// Stops as soon as a candidate precedes the start date.
    pub fn prev_due_date(&self, from: NaiveDate, horizon_days: u32) -> Option<NaiveDate> {
        let start = self.start_date?;
        let mut cursor = from;

        for _ in 0..horizon_days {
            cursor = cursor.pred_opt()?;
            if cursor < start {
                return None;
            }
            if self.is_due_on(cursor) {
                return Some(cursor);
            }
        }

        debug!(from = %from, horizon_days, "previous due search exhausted horizon");
        None
    }
}
