//! Error types for loading and editing flight schedules.

use std::io;
use std::path::PathBuf;

/// Result type for dataset ingestion.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading a dataset.
///
/// Every variant is fatal for the load in progress: no partially built
/// store is handed back to the caller. Line numbers are 1-based and count
/// the header as line 1.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot open dataset {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed reading dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Blank line at line {line}")]
    BlankLine { line: usize },

    #[error("Malformed record at line {line}: {content:?}")]
    Format { line: usize, content: String },

    #[error("Invalid departure time {token:?} at line {line}")]
    TimeFormat { line: usize, token: String },

    #[error("Line {line} is {length} bytes long, limit is {max}")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },
}

impl LoadError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::BlankLine { line }
            | LoadError::Format { line, .. }
            | LoadError::TimeFormat { line, .. }
            | LoadError::LineTooLong { line, .. } => Some(*line),
            LoadError::FileOpen { .. } | LoadError::Read { .. } => None,
        }
    }
}

/// Errors raised by store mutations and queries.
///
/// These are recoverable: an operation that fails leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Position {index} is out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Record handle no longer refers to a live record")]
    StaleHandle,

    #[error("Records are not adjacent")]
    NotAdjacent,

    #[error("Search query is empty")]
    EmptyQuery,
}
