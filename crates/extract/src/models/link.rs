use std::fmt::{Display, Formatter, Result as FmtResult};

/// A module item that links to a file attachment.
///
/// The title is the anchor text as shown in the module listing. It is only
/// provisional: the authoritative title lives on the detail page (see
/// [`DetailPage`](super::DetailPage)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentRef {
    pub title: String,
    /// Link to the attachment's detail page
    pub detail_href: String,
}
impl AttachmentRef {
    pub fn new(title: impl Into<String>, detail_href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail_href: detail_href.into(),
        }
    }
}
impl Display for AttachmentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}, {}>", self.title, self.detail_href)
    }
}

/// A module item that links somewhere outside of Canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalLinkRef {
    pub title: String,
    pub url: String,
}
impl ExternalLinkRef {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
impl Display for ExternalLinkRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}, {}>", self.title, self.url)
    }
}
