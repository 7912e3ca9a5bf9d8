mod config;

pub use config::{Config, FormatConfig, SearchConfig};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commitment::Commitment;
use crate::error::Result;

/// Returns `~/.config/cadence[-dev]/` based on CADENCE_ENV.
///
/// Set CADENCE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CADENCE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("cadence-dev")
    } else {
        base_dir.join("cadence")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read a commitment JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON object.
pub fn load_commitment(path: &Path) -> Result<Commitment> {
    let content = std::fs::read_to_string(path)?;
    let commitment = Commitment::from_json_str(&content)?;
    debug!(path = %path.display(), entries = commitment.completions.len(), "loaded commitment");
    Ok(commitment)
}

/// Write a commitment back in canonical shape.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_commitment(path: &Path, commitment: &Commitment) -> Result<()> {
    let content = commitment.to_json_string()?;
    std::fs::write(path, content)?;
    debug!(path = %path.display(), "saved commitment");
    Ok(())
}
