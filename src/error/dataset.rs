//! Dataset error module.
//!
//! Errors surfaced while reading and parsing the bundled suggestion
//! dataset. Per-record problems (a missing word, a non-numeric frequency)
//! are not errors at all: the loader skips or defaults those leniently, and
//! only structural failures end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the suggestion dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Error when the dataset file is missing.
    #[error("Dataset file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when reading the dataset file.
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the dataset is not well-formed JSON.
    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error when the top-level JSON value is not an array of records.
    #[error("Dataset root must be a JSON array, got {0}")]
    NotAnArray(&'static str),
}
