use super::{Body, Transport};
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Knobs for the underlying HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub user_agent: String,
    /// No timeout when `None`; large lecture recordings can take a while.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

/// Blocking HTTP transport that sends the session cookies with every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(jar: Jar, options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .cookie_provider(Arc::new(jar))
            .user_agent(options.user_agent.as_str())
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .timeout(options.timeout)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip(self), fields(url = %url))]
    fn get(&self, url: &Url) -> Result<Body> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .or_raise(|| ErrorKind::Request(url.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        tracing::debug!(status = status.as_u16(), length = response.content_length(), "Response received");
        Ok(Box::new(response))
    }
}
