/// The two facts we need from an attachment's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailPage {
    /// Heading of the detail page; filenames are derived from this, not
    /// from the module listing's anchor text.
    pub title: String,
    /// Link to the actual file contents
    pub download_href: String,
}
