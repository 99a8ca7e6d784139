use crate::error::{ErrorKind, Result};
use std::cell::OnceCell;

#[derive(Debug)]
enum Slot<T> {
    Fetched(T),
    FetchFailed(ErrorKind),
}

/// Fetch-at-most-once slot for a page.
///
/// Starts out empty (not fetched). The first call to
/// [`PageCache::get_or_fetch`] runs the fetch and fills the slot with either
/// the page or the failure; every later call answers from the slot without
/// running the fetch again.
///
/// Pages are handed out by reference, so anything parsed out of them can keep
/// borrowing for as long as the cache lives.
#[derive(Debug)]
pub struct PageCache<T> {
    slot: OnceCell<Slot<T>>,
}

impl<T> Default for PageCache<T> {
    fn default() -> Self {
        Self { slot: OnceCell::new() }
    }
}

impl<T> PageCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self.slot.get(), Some(Slot::Fetched(_)))
    }

    pub fn get_or_fetch(&self, fetch: impl FnOnce() -> Result<T>) -> Result<&T> {
        if let Some(slot) = self.slot.get() {
            return Self::answer(slot);
        }
        match fetch() {
            Ok(page) => Self::answer(self.slot.get_or_init(|| Slot::Fetched(page))),
            Err(err) => {
                let _ = self.slot.set(Slot::FetchFailed((*err).clone()));
                // Only the first caller gets the full error tree.
                Err(err)
            },
        }
    }

    fn answer(slot: &Slot<T>) -> Result<&T> {
        match slot {
            Slot::Fetched(page) => Ok(page),
            Slot::FetchFailed(kind) => exn::bail!(kind.clone()),
        }
    }
}
