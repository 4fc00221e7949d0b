//! Error types for runlog core operations.
//!
//! Every failure in the core is local and recoverable: validation runs before
//! any state is touched, so callers can report the error and carry on.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for runlog operations.
pub type Result<T> = std::result::Result<T, RunLogError>;

/// Core error type for runlog operations.
#[derive(Debug, Error)]
pub enum RunLogError {
    /// A run field was malformed or out of range.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A date string was not `YYYY-MM-DD`.
    #[error("Invalid date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    /// No run is logged on the requested date.
    #[error("Not found: no run on {date}")]
    NotFound { date: NaiveDate },

    /// A bulk-load record is structurally invalid.
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// A bulk-load record parsed but the run it describes is invalid.
    #[error("Invalid record on line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<RunLogError>,
    },

    /// The bulk-load source could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The rule a run field violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("distance must be a number greater than zero")]
    NonPositiveDistance,

    #[error("time is empty")]
    EmptyTime,

    #[error("time contains unexpected character '{0}'")]
    IllegalCharacter(char),

    #[error("time has {0} fields, expected at most 3 (HH:MM:SS)")]
    TooManyFields(usize),

    #[error("time field '{0}' is not a valid number")]
    InvalidField(String),

    #[error("time is zero, pick a time greater than 0")]
    ZeroDuration,

    #[error("rating {0} is outside the range 1-10")]
    RatingOutOfRange(u8),
}

impl RunLogError {
    /// Line number of a failed bulk-load record, if this error came from one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RunLogError::Format { line, .. } | RunLogError::Record { line, .. } => Some(*line),
            _ => None,
        }
    }
}
