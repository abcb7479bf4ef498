//! Error types for taskgrid
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, missing data source, invalid config)
//! - 4: Operation failed (io, terminal, serialization)
//!
//! The tokenizer and the aggregation layer never produce errors; malformed
//! input degrades to defaults. The variants here cover the boundary around
//! them (loading the source, config, output, terminal).

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskgrid CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskgrid operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Data source not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceNotFound(_)
            | Error::InvalidConfig(_)
            | Error::InvalidArgument(_)
            | Error::ConfigExists(_) => exit_codes::USER_ERROR,

            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error envelopes, when a variant has any.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::SourceNotFound(path) | Error::ConfigExists(path) => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            _ => None,
        }
    }
}

/// Result type alias for taskgrid operations
pub type Result<T> = std::result::Result<T, Error>;
