/// Error types for loading inventories.
///
/// Only the loader produces errors. Classification, filtering and
/// aggregation are total: an empty filter result is a valid value, and the
/// classifier falls back to `Indeterminate` instead of rejecting text.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure to load an inventory file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("missing required columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
}

/// Why a single row was rejected (a malformed record).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("missing value for column `{column}`")]
    MissingField { column: &'static str },

    #[error("invalid date `{value}` in column `{column}`")]
    InvalidDate { column: &'static str, value: String },

    #[error("invalid number `{value}` in column `{column}`")]
    InvalidNumber { column: &'static str, value: String },

    #[error("unreadable row: {0}")]
    Unreadable(String),
}
