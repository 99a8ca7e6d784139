//! Authenticated HTTP access to a Canvas LMS instance.
//!
//! A [`Session`] is built once from the browser's [`Credentials`] and then
//! borrowed by everything that needs to fetch a page or download a file.

mod auth;
mod cache;
pub mod error;
mod session;
mod transport;

pub use auth::{Browser, Cookie, Credentials};
pub use cache::PageCache;
pub use reqwest::Url;
pub use session::Session;
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;
pub use transport::{Body, ClientOptions, HttpTransport, Transport};
