//! Session Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A session error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// `Clone` so that a failed page fetch can be remembered by a
/// [`PageCache`](crate::PageCache) and reported again without re-requesting.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable session cookie was found for the domain.
    #[display("no session cookies found for {_0}")]
    MissingCredential(#[error(not(source))] String),
    /// The browser's cookie store couldn't be read (locked, encrypted, not installed).
    #[display("could not read the {_0} cookie store")]
    CookieStore(#[error(not(source))] String),
    /// Not a browser whose cookie store we can read.
    #[display("unknown browser: {_0}")]
    UnknownBrowser(#[error(not(source))] String),
    /// The exported cookie file couldn't be read.
    #[display("could not read cookie file: {}", _0.display())]
    CookieFile(#[error(not(source))] PathBuf),
    /// A link couldn't be resolved against the base URL.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
    /// The HTTP client couldn't be constructed (TLS backend, invalid user agent).
    #[display("could not build HTTP client")]
    Client,
    /// The request never got a response (DNS, connection, timeout).
    #[display("request failed: {_0}")]
    Request(#[error(not(source))] String),
    /// The server answered, but not with a success status.
    #[display("{url} responded with HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
    /// The response body couldn't be read to completion.
    #[display("could not read response body from {_0}")]
    Body(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) | Self::Body(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
