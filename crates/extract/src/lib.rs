//! Structural queries over the handful of Canvas pages the crawler visits.
//!
//! Every function here takes an already-parsed [`Html`] document (or an
//! element borrowed from one) and returns plain data. Nothing in this crate
//! touches the network.

mod catalog;
mod consts;
mod detail;
pub mod error;
mod items;
pub mod models;
mod modules;

pub use crate::catalog::courses;
pub use crate::detail::detail;
pub use crate::items::{attachment, external_link, is_attachment, is_external_link};
pub use crate::modules::{ModuleEntry, modules};
pub use scraper::{ElementRef, Html};

/// Parses a page from raw response bytes.
///
/// Accepts raw bytes, instead of requiring HTML to be valid UTF-8. Invalid
/// byte sequences are replaced with U+FFFD.
pub fn parse(html: impl AsRef<[u8]>) -> Html {
    Html::parse_document(&String::from_utf8_lossy(html.as_ref()))
}

/// Collects the text of an element, trimmed.
///
/// This is all descendant text joined together, not just the element's own
/// leading text node, so `<h2>Notes <small>v2</small></h2>` reads as
/// `Notes v2`.
pub(crate) fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
