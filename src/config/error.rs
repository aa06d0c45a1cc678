//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Window '{0}' must be greater than zero")]
    ZeroWindow(&'static str),

    #[error("Weight '{name}' must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Off-hours bound '{name}' must be an hour between 0 and 23, got {value}")]
    InvalidHour { name: &'static str, value: u32 },

    #[error("ROT annual cap ({rot}) exceeds the combined ROT+RUT cap ({combined})")]
    InconsistentCaps { rot: u32, combined: u32 },

    #[error("File storage requires a directory")]
    MissingStorageDirectory,
}
