//! Error types for the joost CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the joost CLI.
#[derive(Error, Debug)]
pub enum JoostError {
    /// A configuration file is missing or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a named file failed.
    #[error("File operation failed: {}: {source}", .path.display())]
    FileOperation {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Command-line input was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The grammar could not be converted.
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// At least one checked file holds lexical faults.
    #[error("{failed} of {total} file(s) failed the lexical check")]
    CheckFailed {
        /// Files with faults.
        failed: usize,
        /// Files checked.
        total: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JoostError {
    /// Wrap an I/O error with the path it concerns.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JoostError::FileOperation {
            path: path.into(),
            source,
        }
    }
}

/// Structural problems in a BNF grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// An alternative appeared before any rule header.
    #[error("line {line}: alternative outside of any rule")]
    OrphanAlternative {
        /// 1-based line number.
        line: usize,
    },

    /// A header with nothing before the colon.
    #[error("line {line}: rule header has no name")]
    EmptyRuleName {
        /// 1-based line number.
        line: usize,
    },
}

/// Result type alias using JoostError.
pub type Result<T> = std::result::Result<T, JoostError>;
