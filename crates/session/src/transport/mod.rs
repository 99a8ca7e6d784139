//! Transport abstraction.
//!
//! Everything above this layer only ever issues `GET` requests and reads the
//! body, so that is all a transport needs to provide. The HTTP implementation
//! talks to the real server; the mock implementation (behind the `mock`
//! feature) serves canned pages and records what was asked for.

mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

use crate::error::Result;
use reqwest::Url;
use std::io::Read;

pub use http::{ClientOptions, HttpTransport};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

/// A decoded response body, streamed.
pub type Body = Box<dyn Read + Send>;

/// Performs authenticated `GET` requests.
pub trait Transport: Send + Sync {
    /// Requests `url`, failing on anything but a success status.
    ///
    /// Content-encoding (gzip, deflate, brotli) is undone before the body is
    /// returned.
    fn get(&self, url: &Url) -> Result<Body>;
}
