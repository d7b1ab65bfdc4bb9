//! Error handling for catalog operations.
//!
//! Covers the three failure classes of the engine (per-line parse skips,
//! unavailable sources, rejected filter requests) plus the configuration and
//! argument errors raised by the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

/// Comprehensive error types for catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// A single data line could not be turned into a record
    #[error("Line {line}: {reason}")]
    LineParse { line: usize, reason: String },

    /// The library source is missing or unreadable
    #[error("Library source unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A filter could not be activated because its anchor is missing
    #[error("Filter precondition failed: {requirement}")]
    FilterPrecondition {
        filter: &'static str,
        requirement: String,
    },

    /// No record with this id exists in the loaded set
    #[error("Unknown record: id = {id}")]
    UnknownRecord { id: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Invalid value supplied for a named argument
    #[error("Invalid {argument}: '{value}' ({expected})")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        expected: String,
    },
}

impl Error {
    /// Create a line parse error
    pub fn line_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::LineParse {
            line,
            reason: reason.into(),
        }
    }

    /// Create a source unavailable error for a path that does not exist
    pub fn source_missing(path: impl Into<PathBuf>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source: None,
        }
    }

    /// Create a source unavailable error wrapping the underlying I/O failure
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a filter precondition error
    pub fn filter_precondition(filter: &'static str, requirement: impl Into<String>) -> Self {
        Self::FilterPrecondition {
            filter,
            requirement: requirement.into(),
        }
    }

    /// Create an unknown record error
    pub fn unknown_record(id: usize) -> Self {
        Self::UnknownRecord { id }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(
        argument: &'static str,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// True for errors the user can fix by changing their selection
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::FilterPrecondition { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid config file: {}", error),
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
