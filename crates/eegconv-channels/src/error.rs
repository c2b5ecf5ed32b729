//! Error types for channel-mapping operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from channel renaming and type assignment.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// An alias rule names a channel absent from the target recording.
    #[error("channel not found in recording: {name}")]
    ChannelNotFound { name: String },

    /// Unparseable alias-file line.
    #[error("malformed alias at {path}:{line}: {reason}")]
    MalformedAlias {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;

impl ChannelError {
    /// Create a ChannelNotFound error.
    pub fn channel_not_found(name: impl Into<String>) -> Self {
        Self::ChannelNotFound { name: name.into() }
    }

    /// Create a MalformedAlias error.
    pub fn malformed_alias(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedAlias {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
