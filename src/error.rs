//! Error types for the staff roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! decoding records, and persisting the roster.

use thiserror::Error;

/// The main error type for the staff roster.
///
/// # Example
///
/// ```
/// use staff_roster::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The data file could not be opened, read, or written.
    #[error("Cannot access data file '{path}': {message}")]
    Storage {
        /// The data file path.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// A record line started with a kind token that is not recognised.
    #[error("Unknown employee kind: {kind}")]
    UnknownKind {
        /// The offending token.
        kind: String,
    },

    /// A record line did not match the line grammar.
    #[error("Malformed record line: {message}")]
    MalformedLine {
        /// What was wrong with the line.
        message: String,
    },
}

impl RosterError {
    pub(crate) fn storage(path: &std::path::Path, err: std::io::Error) -> Self {
        RosterError::Storage {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        RosterError::MalformedLine {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
