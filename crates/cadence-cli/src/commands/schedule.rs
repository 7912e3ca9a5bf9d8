//! Schedule evaluation commands for CLI.

use std::path::{Path, PathBuf};

use cadence_core::storage::load_commitment;
use cadence_core::{repeat_badge, schedule_label, to_local_iso_date, Config, Schedule};
use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::json;

use super::{date_or_today, parse_date};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Is the commitment due on a date
    Due {
        /// Commitment JSON file
        file: PathBuf,
        /// Date to evaluate (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Next due date on or after a date
    Next {
        /// Commitment JSON file
        file: PathBuf,
        /// Search from this date (default: today)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Days to scan (default: search.next_horizon_days)
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// Closest due date strictly before a date
    Prev {
        /// Commitment JSON file
        file: PathBuf,
        /// Search back from this date (default: today)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Days to scan (default: search.prev_horizon_days)
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// Labels and summary for display
    Show {
        /// Commitment JSON file
        file: PathBuf,
        /// Reference date (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report problems with the stored rule
    Check {
        /// Commitment JSON file
        file: PathBuf,
    },
}

fn require_schedule(file: &Path) -> Result<Schedule, Box<dyn std::error::Error>> {
    load_commitment(file)?
        .schedule
        .ok_or_else(|| format!("{} has no schedule", file.display()).into())
}

fn print_optional_date(date: Option<NaiveDate>) {
    match date {
        Some(d) => println!("{}", to_local_iso_date(d)),
        None => println!("none"),
    }
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        ScheduleAction::Due { file, date, json } => {
            let commitment = load_commitment(&file)?;
            let date = date_or_today(date);
            let due = commitment.is_due_on(date);
            let in_range = commitment
                .schedule
                .as_ref()
                .is_some_and(|s| s.is_within_range(date));
            if json {
                let out = json!({
                    "date": to_local_iso_date(date),
                    "due": due,
                    "inRange": in_range,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", if due { "due" } else { "not due" });
            }
        }
        ScheduleAction::Next { file, from, horizon } => {
            let schedule = require_schedule(&file)?;
            let horizon = horizon.unwrap_or(config.search.next_horizon_days);
            print_optional_date(schedule.next_due_date(date_or_today(from), horizon));
        }
        ScheduleAction::Prev { file, from, horizon } => {
            let schedule = require_schedule(&file)?;
            let horizon = horizon.unwrap_or(config.search.prev_horizon_days);
            print_optional_date(schedule.prev_due_date(date_or_today(from), horizon));
        }
        ScheduleAction::Show { file, date, json } => {
            let schedule = require_schedule(&file)?;
            let reference = date_or_today(date);
            let formatter = config.formatter();
            let ended = schedule.end_date.is_some_and(|end| reference > end);
            let status = if ended {
                formatter.ended_label(&schedule, reference)
            } else {
                formatter.next_due_label(&schedule, reference)
            };

            if json {
                let out = json!({
                    "label": schedule_label(&schedule),
                    "badge": repeat_badge(&schedule),
                    "summary": formatter.schedule_summary(&schedule, reference),
                    "status": status,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", formatter.schedule_summary(&schedule, reference));
                println!("{status}");
            }
        }
        ScheduleAction::Check { file } => {
            let schedule = require_schedule(&file)?;
            schedule.validate()?;
            println!("ok");
        }
    }
    Ok(())
}
