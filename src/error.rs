//! Error types for the gate
//!
//! A fix version mismatch is not an error. It is reported through
//! [`GateOutcome`](crate::core::models::GateOutcome) and the exit code.

use thiserror::Error;

/// Unified error type for gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// A required input is missing or an input is malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// `JIRA_ISSUE_REGEX` does not compile
    #[error("Invalid issue pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Jira answered 404 for the issue key
    #[error("Issue does not exist: {0}")]
    IssueNotFound(String),

    /// Jira answered with any other non-success status
    #[error("Jira request failed ({status}): {message}")]
    Tracker {
        /// HTTP status code
        status: u16,
        /// First Jira error message, or the raw response body
        message: String,
    },

    /// GitHub answered with a non-success status
    #[error("GitHub request failed ({status}): {message}")]
    Platform {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// A comment was requested outside of a pull request run
    #[error("This action should only run on PR")]
    NotPullRequest,

    /// Transport failure talking to Jira or GitHub
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, GateError>;

impl GateError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
