//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Canvas pages either have the structure we expect or they don't; every
/// variant means the page layout changed (or we were served a login page).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required element could not be found in the document.
    #[display("missing required element: {_0}")]
    MissingElement(#[error(not(source))] &'static str),
    /// The element was found, but without an attribute we depend on.
    #[display("{element} is missing its `{attribute}` attribute")]
    MissingAttribute {
        /// What the element represents.
        element: &'static str,
        /// The attribute that was expected.
        attribute: &'static str,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Parsing the same HTML twice gives the same answer.
        false
    }
}
