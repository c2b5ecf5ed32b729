//! Error types for position conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when converting a digitizer export.
#[derive(Debug, Error)]
pub enum PositionError {
    /// Destination file present and overwrite not permitted.
    #[error("destination already exists: {path} (pass --overwrite to replace it)")]
    DestinationExists { path: PathBuf },

    /// Unparseable line, wrong field count, or unrecognized landmark code.
    #[error("malformed record at {path}:{line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Underlying CSV-level read failure.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for position operations.
pub type Result<T> = std::result::Result<T, PositionError>;

impl PositionError {
    /// Create a DestinationExists error.
    pub fn destination_exists(path: impl Into<PathBuf>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Create a MalformedRecord error.
    pub fn malformed(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a Read error.
    pub fn read(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
