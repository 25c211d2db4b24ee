//! Core error types for worthit-core.
//!
//! The numeric engine (normalize, decompose, evaluate) is total and never
//! fails. Errors only arise at the boundary: parsing user-supplied
//! `"<number> <unit>"` strings, validating magnitudes before they reach the
//! engine, and loading or saving the configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for worthit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while parsing units and unit values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized time unit
    #[error("unknown time unit '{0}' (expected second, minute, hour, day, week, month or year)")]
    UnknownTimeUnit(String),

    /// Unrecognized frequency unit
    #[error("unknown frequency unit '{0}' (expected daily, weekly, monthly or yearly)")]
    UnknownFrequencyUnit(String),

    /// Magnitude is not a number
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Input does not have the `<number> <unit>` shape
    #[error("expected '<number> <unit>', got '{0}'")]
    Malformed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Magnitude below zero
    #[error("'{field}' must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// NaN or infinite magnitude
    #[error("'{field}' must be a finite number (got {value})")]
    NotFinite { field: String, value: f64 },

    /// Decomposition precision outside the accepted range
    #[error("precision must be a finite number >= 0 (got {0})")]
    InvalidPrecision(f64),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Home directory could not be resolved
    #[error("cannot determine configuration directory")]
    NoConfigDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
