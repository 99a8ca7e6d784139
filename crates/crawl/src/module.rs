use crate::error::{ErrorKind, Result};
use canvas_extract::ModuleEntry;
use canvas_extract::models::{AttachmentRef, ExternalLinkRef};
use exn::ResultExt;
use std::path::PathBuf;

/// A single module, split into the kinds of item we care about.
///
/// Anything that is neither a file attachment nor an external link (pages,
/// quizzes, headers) is ignored.
#[derive(Debug, Clone)]
pub struct ModulePage<'a> {
    module: ModuleEntry<'a>,
}

impl<'a> ModulePage<'a> {
    pub fn new(module: ModuleEntry<'a>) -> Self {
        Self { module }
    }

    pub fn title(&self) -> &str {
        &self.module.title
    }

    /// Output directory for this module, relative to its course directory.
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(canvas_storage::slug(&self.module.title))
    }

    pub fn attachments(&self) -> Result<Vec<AttachmentRef>> {
        self.module
            .items
            .iter()
            .filter(|item| canvas_extract::is_attachment(item))
            .map(|item| canvas_extract::attachment(item).or_raise(|| ErrorKind::Parse(self.module.title.clone())))
            .collect()
    }

    pub fn external_links(&self) -> Result<Vec<ExternalLinkRef>> {
        self.module
            .items
            .iter()
            .filter(|item| canvas_extract::is_external_link(item))
            .map(|item| canvas_extract::external_link(item).or_raise(|| ErrorKind::Parse(self.module.title.clone())))
            .collect()
    }
}
