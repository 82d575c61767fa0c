//! Error definitions
//!
//! This module provides error types for jiff-assertions.

use thiserror::Error;

/// Main error type for jiff-assertions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more assertions did not hold.
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    /// An argument handed to the library itself was out of range.
    ///
    /// This is a caller contract violation, not an assertion outcome.
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl Error {
    /// Create an assertion failure error.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Returns true if this error reports a caller contract violation.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
