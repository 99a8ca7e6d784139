use crate::error::{ErrorKind, Result};
use canvas_extract::Html;
use canvas_extract::models::{AttachmentRef, DetailPage};
use canvas_session::{PageCache, Session};
use canvas_storage::LocalBackend;
use exn::ResultExt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// What [`DocumentFetcher::download`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was written; `bytes` is its decoded size.
    Downloaded { path: PathBuf, bytes: u64 },
    /// A file was already at `path`, so nothing was requested.
    Skipped { path: PathBuf },
}

impl Outcome {
    /// Destination, relative to the storage root.
    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded { path, .. } | Self::Skipped { path } => path,
        }
    }
}

/// Downloads a single file attachment.
///
/// The attachment's detail page is the source of truth for both the file's
/// title and its real download link. It's fetched on first use and kept for
/// the life of the fetcher.
#[derive(Debug)]
pub struct DocumentFetcher<'s> {
    session: &'s Session,
    attachment: AttachmentRef,
    page: PageCache<Html>,
}

impl<'s> DocumentFetcher<'s> {
    pub fn new(session: &'s Session, attachment: AttachmentRef) -> Self {
        Self {
            session,
            attachment,
            page: PageCache::new(),
        }
    }

    pub fn attachment(&self) -> &AttachmentRef {
        &self.attachment
    }

    fn detail(&self) -> Result<DetailPage> {
        let href = &self.attachment.detail_href;
        let document = self
            .page
            .get_or_fetch(|| self.session.fetch(href).map(canvas_extract::parse))
            .or_raise(|| ErrorKind::Fetch(href.clone()))?;
        canvas_extract::detail(document).or_raise(|| ErrorKind::Parse(href.clone()))
    }

    /// The heading of the detail page, which may differ from the link text in
    /// the module listing.
    pub fn title(&self) -> Result<String> {
        Ok(self.detail()?.title)
    }

    pub fn download_href(&self) -> Result<String> {
        Ok(self.detail()?.download_href)
    }

    /// Output file name derived from [`DocumentFetcher::title`].
    ///
    /// A title with nothing to slug (`!!!`) is a parse error rather than an
    /// empty name, which would point at the directory itself.
    pub fn file_name(&self) -> Result<String> {
        self.file_name_for(&self.detail()?)
    }

    fn file_name_for(&self, detail: &DetailPage) -> Result<String> {
        let file_name = canvas_storage::file_name(&detail.title);
        if Path::new(&file_name).file_name().is_none() {
            tracing::warn!(title = %detail.title, "Title leaves nothing to name the file after");
            exn::bail!(ErrorKind::Parse(self.attachment.detail_href.clone()));
        }
        Ok(file_name)
    }

    /// Streams the file into `directory` (relative to the storage root),
    /// creating the directory if needed.
    ///
    /// An existing file at the destination is left alone and the download is
    /// skipped. Existence is all that's checked; the contents aren't compared.
    #[instrument(skip(self, storage), fields(attachment = %self.attachment.detail_href))]
    pub fn download(&self, storage: &LocalBackend, directory: &Path) -> Result<Outcome> {
        let detail = self.detail()?;
        let file_name = self.file_name_for(&detail)?;
        let path = directory.join(&file_name);

        storage
            .create_dir_all(directory)
            .or_raise(|| ErrorKind::Storage(directory.to_path_buf()))?;
        if storage.exists(&path).or_raise(|| ErrorKind::Storage(path.clone()))? {
            tracing::info!(file = %file_name, "Skipping");
            return Ok(Outcome::Skipped { path });
        }

        tracing::info!(file = %file_name, "Downloading");
        let mut body = self
            .session
            .open(&detail.download_href)
            .or_raise(|| ErrorKind::Fetch(detail.download_href.clone()))?;
        let mut file = storage.create(&path).or_raise(|| ErrorKind::Storage(path.clone()))?;
        // Read and write failures are indistinguishable once copying.
        let bytes = io::copy(&mut body, &mut file).or_raise(|| ErrorKind::Fetch(detail.download_href.clone()))?;
        tracing::debug!(bytes, path = %path.display(), "Downloaded");
        Ok(Outcome::Downloaded { path, bytes })
    }
}
