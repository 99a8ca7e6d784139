//! Crawl Error Types
//!
//! Each kind names *where* the crawl gave up (which page, which file); the
//! child error from the session, extract or storage crate says *why*.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A crawl error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A page or file couldn't be fetched.
    #[display("failed to fetch {_0}")]
    Fetch(#[error(not(source))] String),
    /// A page didn't have the structure we expect.
    #[display("failed to parse {_0}")]
    Parse(#[error(not(source))] String),
    /// The output directory or file couldn't be written.
    #[display("failed to write {}", _0.display())]
    Storage(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
