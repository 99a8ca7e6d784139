use crate::auth::Credentials;
use crate::error::{ErrorKind, Result};
use crate::transport::{Body, ClientOptions, HttpTransport, Transport};
use exn::{OptionExt, ResultExt};
use reqwest::Url;
use std::io::Read;
use tracing::instrument;

/// An authenticated connection to one Canvas instance.
///
/// Links scraped from pages are site-relative (`/courses/123/modules`), so
/// every request goes through [`Session::url`] to be resolved against the base.
pub struct Session {
    base: Url,
    transport: Box<dyn Transport>,
}

impl Session {
    pub fn new(base: Url, transport: impl Transport + 'static) -> Self {
        Self {
            base,
            transport: Box::new(transport),
        }
    }

    /// Builds an HTTP session carrying the browser cookies for `domain`.
    ///
    /// When `domain` is `None` the host of `base` is used.
    pub fn connect(
        base: Url,
        credentials: &Credentials,
        domain: Option<&str>,
        options: &ClientOptions,
    ) -> Result<Self> {
        let domain = match domain {
            Some(domain) => domain.to_string(),
            None => base
                .host_str()
                .map(str::to_string)
                .ok_or_raise(|| ErrorKind::InvalidUrl(base.to_string()))?,
        };
        let jar = credentials.jar(&domain, &base)?;
        let transport = HttpTransport::new(jar, options)?;
        tracing::info!(base = %base, domain = %domain, "Session established");
        Ok(Self::new(base, transport))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves a (usually site-relative) link against the base URL.
    pub fn url(&self, href: &str) -> Result<Url> {
        self.base
            .join(href)
            .or_raise(|| ErrorKind::InvalidUrl(href.to_string()))
    }

    /// Fetches a page and reads its whole body.
    #[instrument(level = "debug", skip(self))]
    pub fn fetch(&self, href: &str) -> Result<Vec<u8>> {
        let url = self.url(href)?;
        let mut body = self.transport.get(&url)?;
        let mut buffer = Vec::new();
        body.read_to_end(&mut buffer)
            .or_raise(|| ErrorKind::Body(url.to_string()))?;
        Ok(buffer)
    }

    /// Opens a streaming body, for downloads too big to hold in memory.
    #[instrument(level = "debug", skip(self))]
    pub fn open(&self, href: &str) -> Result<Body> {
        let url = self.url(href)?;
        self.transport.get(&url)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("base", &self.base.as_str()).finish_non_exhaustive()
    }
}
