//! Error types for the nameshift library.
//!
//! Per-file failures (unreadable files, rewrites that would break syntax)
//! never surface as errors from the pipeline; they degrade to "this file
//! unchanged" and are reported through logging. The variants here cover the
//! remaining failure paths, of which only invalid preferences abort a run.

use std::io;

use thiserror::Error;

/// Main result type for nameshift operations.
pub type Result<T> = std::result::Result<T, NameshiftError>;

/// Error type for all nameshift operations.
#[derive(Error, Debug)]
pub enum NameshiftError {
    /// I/O related errors (file operations, directory traversal)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors; fatal at load time, before any file is touched
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Parsing and language processing errors
    #[error("Parse error in {language}: {message}")]
    Parse {
        /// Programming language being parsed
        language: String,
        /// Error description
        message: String,
        /// File path where error occurred
        file_path: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl NameshiftError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_in_file(
        language: impl Into<String>,
        message: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: Some(file_path.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the run can continue past this error.
    ///
    /// Only configuration errors are fatal; everything else is confined to
    /// a single file.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }
}

impl From<io::Error> for NameshiftError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = NameshiftError::config_field("bad style", "functions");
        match err {
            NameshiftError::Config { field, .. } => assert_eq!(field.as_deref(), Some("functions")),
            _ => panic!("expected config error"),
        }

        let err = NameshiftError::parse_in_file("python", "syntax error", "bad.py");
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn test_config_errors_are_fatal() {
        assert!(!NameshiftError::config("nope").is_recoverable());
        assert!(NameshiftError::validation("nope").is_recoverable());
        assert!(NameshiftError::parse("python", "nope").is_recoverable());
    }
}
