//! Compliance record commands for CLI.
//!
//! These are the only commands that write: each loads the file, applies one
//! edit and writes it back in canonical shape before anything re-evaluates it.

use std::path::PathBuf;

use cadence_core::storage::{load_commitment, save_commitment};
use cadence_core::to_local_iso_date;
use chrono::NaiveDate;
use clap::Subcommand;

use super::{date_or_today, parse_date};

#[derive(Subcommand)]
pub enum RecordAction {
    /// Mark a day compliant
    Mark {
        /// Commitment JSON file
        file: PathBuf,
        /// Day to mark (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Remove a day's compliance
    Unmark {
        /// Commitment JSON file
        file: PathBuf,
        /// Day to unmark (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Flip a day's compliance
    Toggle {
        /// Commitment JSON file
        file: PathBuf,
        /// Day to toggle (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List compliant days
    List {
        /// Commitment JSON file
        file: PathBuf,
    },
}

pub fn run(action: RecordAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecordAction::Mark { file, date } => {
            let date = date_or_today(date);
            let mut commitment = load_commitment(&file)?;
            commitment.completions.mark(date);
            save_commitment(&file, &commitment)?;
            println!("marked {}", to_local_iso_date(date));
        }
        RecordAction::Unmark { file, date } => {
            let date = date_or_today(date);
            let mut commitment = load_commitment(&file)?;
            commitment.completions.unmark(date);
            save_commitment(&file, &commitment)?;
            println!("unmarked {}", to_local_iso_date(date));
        }
        RecordAction::Toggle { file, date } => {
            let date = date_or_today(date);
            let mut commitment = load_commitment(&file)?;
            let compliant = commitment.completions.toggle(date);
            save_commitment(&file, &commitment)?;
            let verb = if compliant { "marked" } else { "unmarked" };
            println!("{verb} {}", to_local_iso_date(date));
        }
        RecordAction::List { file } => {
            let commitment = load_commitment(&file)?;
            for date in commitment.completions.iter_compliant() {
                println!("{}", to_local_iso_date(date));
            }
        }
    }
    Ok(())
}
