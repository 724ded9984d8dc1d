//! Error types for decoding and running plot scripts.

use thiserror::Error;

/// A single script line that could not be turned into a command.
///
/// Decode errors are per line and never stop a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unknown command: {line}")]
    UnknownCommand { line: String },

    #[error("invalid integer '{token}' in: {line}")]
    InvalidInteger { line: String, token: String },

    #[error("'{command}' expects {expected} argument(s), got {found}: {line}")]
    ArgumentCount {
        line: String,
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown turn angle '{token}' in: {line}")]
    UnknownAngle { line: String, token: String },
}

impl DecodeError {
    /// The offending line, trimmed.
    pub fn line(&self) -> &str {
        match self {
            DecodeError::UnknownCommand { line }
            | DecodeError::InvalidInteger { line, .. }
            | DecodeError::ArgumentCount { line, .. }
            | DecodeError::UnknownAngle { line, .. } => line,
        }
    }
}

/// A failure that aborts a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error(
        "draw command exceeds grid bounds at line {line_no}: cell ({col}, {row}) is outside {width}x{height}"
    )]
    OutOfBounds {
        line_no: usize,
        col: i64,
        row: i64,
        width: usize,
        height: usize,
    },
}
