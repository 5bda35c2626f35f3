//! Error types for the jcd library.
//!
//! This module provides the error hierarchy for path expression parsing,
//! directory listing, and resolution, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a jcd error.
///
/// # Examples
///
/// ```
/// use jcd::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the jcd library.
///
/// Every variant is terminal: a resolution that hits any of these is aborted
/// as a whole, there is no partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The path expression contains an empty segment.
    #[error("malformed expression '{expression}': {reason}")]
    MalformedExpression {
        /// The raw expression as given.
        expression: String,
        /// Why the expression was rejected.
        reason: String,
    },

    /// A cursor path does not exist or is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that could not be listed.
        path: PathBuf,
    },

    /// A directory exists but cannot be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    Unreadable {
        /// The directory that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A pattern segment matched no child directory.
    #[error("no directory matching '{pattern}' in {}", base.display())]
    NoMatch {
        /// The pattern text that failed to match.
        pattern: String,
        /// The directory that was searched.
        base: PathBuf,
    },

    /// The requested match index is beyond the candidate list.
    #[error("match index {index} out of range ({count} candidate(s))")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of candidates available.
        count: usize,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Builds a `MalformedExpression` error.
    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if error indicates a path does not exist or is not a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use jcd::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Check if error means a directory could not be listed.
    #[must_use]
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    /// Check if error means a pattern matched nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use jcd::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NoMatch {
    ///     pattern: "src".to_string(),
    ///     base: PathBuf::from("/tmp"),
    /// };
    /// assert!(err.is_no_match());
    /// ```
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    /// Check if error means the match index was too large.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if error means the expression itself was rejected.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedExpression { .. })
    }
}
