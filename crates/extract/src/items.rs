//! Readers for the raw module items carried by a [`ModuleEntry`](crate::ModuleEntry).

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{AttachmentRef, ExternalLinkRef};
use exn::OptionExt;
use scraper::{ElementRef, Selector};

/// Whether the item, or anything inside it, carries the `attachment` class.
pub fn is_attachment(item: &ElementRef<'_>) -> bool {
    has_marker(item, &consts::ATTACHMENT_MARKER_SELECTOR)
}

/// Whether the item, or anything inside it, carries the `external_url` class.
pub fn is_external_link(item: &ElementRef<'_>) -> bool {
    has_marker(item, &consts::EXTERNAL_URL_MARKER_SELECTOR)
}

/// Reads a file attachment item: the screen-reader anchor's text and the
/// link to the attachment's detail page.
pub fn attachment(item: &ElementRef<'_>) -> Result<AttachmentRef> {
    let anchor = item
        .select(&consts::ATTACHMENT_ANCHOR_SELECTOR)
        .next()
        .ok_or_raise(|| ErrorKind::MissingElement("attachment link"))?;
    let href = anchor.attr("href").ok_or_raise(|| ErrorKind::MissingAttribute {
        element: "attachment link",
        attribute: "href",
    })?;
    Ok(AttachmentRef::new(crate::text_of(&anchor), href))
}

/// Reads an external link item from the anchor's `title` and `href`.
pub fn external_link(item: &ElementRef<'_>) -> Result<ExternalLinkRef> {
    let anchor = item
        .select(&consts::EXTERNAL_URL_ANCHOR_SELECTOR)
        .next()
        .ok_or_raise(|| ErrorKind::MissingElement("external link"))?;
    let url = anchor.attr("href").ok_or_raise(|| ErrorKind::MissingAttribute {
        element: "external link",
        attribute: "href",
    })?;
    let title = anchor.attr("title").map(str::to_string).unwrap_or_else(|| crate::text_of(&anchor));
    Ok(ExternalLinkRef::new(title, url))
}

// `ElementRef::select` only looks at descendants, the item's own classes
// need checking separately.
fn has_marker(item: &ElementRef<'_>, marker: &Selector) -> bool {
    marker.matches(item) || item.select(marker).next().is_some()
}
