use super::{Body, Transport};
use crate::error::{ErrorKind, Result};
use reqwest::Url;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    pages: HashMap<String, Vec<u8>>,
    requests: Vec<String>,
}

/// In-memory transport serving canned pages keyed by path (plus query).
///
/// Unknown paths answer 404. Clones share state, so a test can hand one clone
/// to a session and inspect the requests through another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages<K, V>(pages: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let mock = Self::new();
        for (path, body) in pages {
            mock.insert(path, body);
        }
        mock
    }

    pub fn insert(&self, path: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.state().pages.insert(path.into(), body.into());
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.state().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn key(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &Url) -> Result<Body> {
        let key = key(url);
        let mut state = self.state();
        state.requests.push(key.clone());
        match state.pages.get(&key) {
            Some(body) => Ok(Box::new(Cursor::new(body.clone()))),
            None => exn::bail!(ErrorKind::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
