//! Streak commands for CLI.

use std::path::PathBuf;

use cadence_core::storage::load_commitment;
use cadence_core::Config;
use chrono::NaiveDate;
use clap::Subcommand;

use super::{date_or_today, parse_date};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Consecutive compliant due dates ending today
    Current {
        /// Commitment JSON file
        file: PathBuf,
        /// Reference date (default: today)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
    /// Longest run, merged with the stored baseline
    Best {
        /// Commitment JSON file
        file: PathBuf,
        /// Backward search horizon (default: search.prev_horizon_days)
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// Current and best as JSON
    Summary {
        /// Commitment JSON file
        file: PathBuf,
        /// Reference date (default: today)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let calculator = config.streak_calculator();

    match action {
        StreakAction::Current { file, today } => {
            let commitment = load_commitment(&file)?;
            println!("{}", calculator.current_streak(&commitment, date_or_today(today)));
        }
        StreakAction::Best { file, horizon } => {
            let commitment = load_commitment(&file)?;
            let best = match horizon {
                Some(h) => commitment.best_streak(h),
                None => calculator.best_streak(&commitment),
            };
            println!("{best}");
        }
        StreakAction::Summary { file, today } => {
            let commitment = load_commitment(&file)?;
            let summary = calculator.summary(&commitment, date_or_today(today));
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
