use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reaching the remote search source
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("Search request failed ({status}): {message}")]
    Source { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, SurveyError>;

/// Errors raised while reading or writing the on-disk snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid snapshot row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: NormalizeError,
    },
}

/// Errors raised by the record normalizer for a single row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("column '{column}' is not a non-negative integer: '{value}'")]
    InvalidNumber { column: &'static str, value: String },

    #[error("column '{column}' is not a YYYY-MM-DD date: '{value}'")]
    InvalidDate { column: &'static str, value: String },

    #[error("column '{column}' must not be empty")]
    Empty { column: &'static str },
}
