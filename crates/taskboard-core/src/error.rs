//! Error types for the task board library.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Comprehensive error type for all board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Task generator answered with a non-200 status
    #[error("Task generator returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// Task generator could not be reached
    #[error("Task generator request failed: {message}")]
    Request {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Task generator answered with a body that does not match the contract
    #[error("Malformed task generator response: {message}")]
    MalformedResponse { message: String },
    /// Task generator did not answer in time
    #[error("Task generation timed out after {seconds}s")]
    Timeout { seconds: u64 },
    /// Generation result arrived after a reset or a newer request
    #[error("Generation result discarded: superseded by a reset or a newer request")]
    Superseded,
    /// Generation request was abandoned before its result was applied
    #[error("Task generation was cancelled before it completed")]
    Cancelled,
    /// A drag gesture is already holding a task
    #[error("A drag gesture is already in progress for task '{task_id}'")]
    GestureInProgress { task_id: String },
    /// Operation requires a loaded project
    #[error("No project is loaded")]
    NoProject,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a transport error with a short description of the failed step.
    pub fn request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            message: message.into(),
            source,
        }
    }

    /// Creates a timeout error, rounding partial seconds up so a sub-second
    /// limit never reads as zero.
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            seconds: limit.as_secs() + u64::from(limit.subsec_nanos() > 0),
        }
    }

    /// Returns true for errors raised before anything was dispatched or sent.
    ///
    /// Validation failures are reported to the user but never recorded in the
    /// board state.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to BoardError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| BoardError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = BoardError::invalid_input("description").with_reason("must not be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'description': must not be empty"
        );
    }

    #[test]
    fn test_timeout_is_distinct_from_http() {
        let timeout = BoardError::Timeout { seconds: 30 };
        let http = BoardError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(timeout.to_string().contains("timed out after 30s"));
        assert!(http.to_string().contains("HTTP 502"));
        assert!(!timeout.is_validation());
    }

    #[test]
    fn test_timeout_rounds_partial_seconds_up() {
        let short = BoardError::timeout(Duration::from_millis(500));
        assert!(matches!(short, BoardError::Timeout { seconds: 1 }));
        assert_eq!(short.to_string(), "Task generation timed out after 1s");

        let whole = BoardError::timeout(Duration::from_secs(30));
        assert!(matches!(whole, BoardError::Timeout { seconds: 30 }));

        let ragged = BoardError::timeout(Duration::from_millis(2_001));
        assert!(matches!(ragged, BoardError::Timeout { seconds: 3 }));
    }

    #[test]
    fn test_with_context_wraps_message() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        let err = io.with_context("Writing export").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Writing export: disk full");
    }
}
