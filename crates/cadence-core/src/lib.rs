//! # Cadence Core Library
//!
//! Recurrence and adherence engine for recurring commitments (habits and
//! repeating tasks). Given a declarative recurrence rule and a sparse record of
//! which days a commitment was satisfied, it decides whether a day is due,
//! searches for due dates within a bounded horizon and derives streaks.
//!
//! ## Architecture
//!
//! Four stateless layers, each built on the one before it:
//!
//! - **Evaluator**: [`Schedule::is_due_on`] and [`Schedule::is_within_range`]
//! - **Search**: [`Schedule::next_due_date`] and [`Schedule::prev_due_date`]
//! - **Streaks**: [`StreakCalculator`] (current and best runs)
//! - **Formatting**: [`schedule_label`], [`Formatter`]
//!
//! Every function takes its reference date explicitly; only the outermost
//! caller reads the clock via [`today_local`]. Nothing here writes to a
//! [`CompletionRecord`]; the owning layer edits it between evaluations.

pub mod commitment;
pub mod completion;
pub mod date;
pub mod error;
pub mod format;
pub mod schedule;
pub mod search;
pub mod storage;
pub mod streak;

pub use commitment::Commitment;
pub use completion::CompletionRecord;
pub use date::{parse_local_date, to_local_iso_date, today_local};
pub use error::{ConfigError, CoreError, ValidationError};
pub use format::{display_date, repeat_badge, schedule_label, Formatter};
pub use schedule::{RepeatKind, Schedule};
pub use search::{DEFAULT_NEXT_HORIZON_DAYS, DEFAULT_PREV_HORIZON_DAYS};
pub use storage::Config;
pub use streak::{StreakCalculator, StreakSummary};
