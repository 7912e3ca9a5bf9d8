//! Core error types for cadence-core.
//!
//! Evaluation itself never fails: malformed schedules degrade to "not due".
//! These errors cover the boundary only (parsing arguments, reading and
//! writing files, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cadence-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML write errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string is not a canonical `YYYY-MM-DD` calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Schedule has no start date, so it is never due
    #[error("Schedule has no start date")]
    MissingStartDate,

    /// End date precedes start date
    #[error("Invalid date range: end date ({end}) is before start date ({start})")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Repeat kind missing or not recognized
    #[error("Unknown or missing repeat kind")]
    UnknownRepeatKind,

    /// Custom weekday schedule with no days selected
    #[error("Custom weekday schedule has no days selected")]
    NoDaysSelected,

    /// Interval could not be read as a number
    #[error("Interval days is not a number")]
    MalformedInterval,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
