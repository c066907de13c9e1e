//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Gaps in the data itself (missing coordinates, missing cost, odd county
//! names) are never errors; they surface as "no data" downstream.

use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read dataset: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading a threshold table
#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("Failed to read threshold file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Threshold TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Threshold table '{0}' has no buckets")]
    EmptyTable(String),

    #[error("Threshold table '{table}' is not strictly descending at {value}")]
    NotDescending { table: String, value: f64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
