//! Top-down traversal of a Canvas account.
//!
//! [`CourseCatalog`] lists courses, [`CoursePage`] lists a course's modules,
//! [`ModulePage`] picks out a module's file attachments and external links,
//! and [`DocumentFetcher`] saves each attachment to
//! `{course}/{module}/{file}` under the output directory. [`Crawler`] strings
//! them together.
//!
//! Everything runs sequentially on the calling thread, and the first error
//! ends the crawl.

mod catalog;
mod course;
mod document;
pub mod error;
mod module;

pub use crate::catalog::{CATALOG_HREF, CourseCatalog};
pub use crate::course::CoursePage;
pub use crate::document::{DocumentFetcher, Outcome};
pub use crate::module::ModulePage;

use crate::error::Result;
use canvas_extract::models::CourseEntry;
use canvas_session::Session;
use canvas_storage::LocalBackend;
use tracing::{info_span, instrument};

/// Which courses to crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    selected: Vec<String>,
}

impl CourseFilter {
    /// Every course.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only courses matching one of `selected`, either by exact href
    /// (`/courses/30147`) or by course id (`30147`).
    pub fn only(selected: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            selected: selected.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, course: &CourseEntry) -> bool {
        self.selected.is_empty()
            || self
                .selected
                .iter()
                .any(|selected| *selected == course.href || course.id() == Some(selected.as_str()))
    }
}

/// Tally of a finished crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub courses: usize,
    pub modules: usize,
    pub downloaded: usize,
    pub skipped: usize,
    /// Seen and logged, never fetched.
    pub external_links: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Downloaded { .. } => self.downloaded += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Crawls every (selected) course, writing attachments into storage.
#[derive(Debug)]
pub struct Crawler<'s> {
    session: &'s Session,
    storage: &'s LocalBackend,
    filter: CourseFilter,
}

impl<'s> Crawler<'s> {
    pub fn new(session: &'s Session, storage: &'s LocalBackend) -> Self {
        Self {
            session,
            storage,
            filter: CourseFilter::all(),
        }
    }

    pub fn with_filter(mut self, filter: CourseFilter) -> Self {
        self.filter = filter;
        self
    }

    #[instrument(skip(self), fields(root = %self.storage.root().display()))]
    pub fn run(&self) -> Result<Summary> {
        let mut summary = Summary::default();
        let catalog = CourseCatalog::new(self.session);
        for course in catalog.list_courses()? {
            if !self.filter.matches(&course) {
                tracing::debug!(course = %course, "Not selected");
                continue;
            }
            let _span = info_span!("course", name = %course.name).entered();
            self.crawl_course(CoursePage::new(self.session, course), &mut summary)?;
            summary.courses += 1;
        }
        tracing::info!(
            courses = summary.courses,
            modules = summary.modules,
            downloaded = summary.downloaded,
            skipped = summary.skipped,
            "Crawl finished"
        );
        Ok(summary)
    }

    fn crawl_course(&self, course: CoursePage<'_>, summary: &mut Summary) -> Result<()> {
        for module in course.list_modules()? {
            let module = ModulePage::new(module);
            let _span = info_span!("module", title = module.title()).entered();
            let directory = course.directory().join(module.directory());

            for attachment in module.attachments()? {
                let outcome = DocumentFetcher::new(self.session, attachment).download(self.storage, &directory)?;
                summary.record(&outcome);
            }
            // External links are informational only; a malformed one never stops a download.
            match module.external_links() {
                Ok(links) => {
                    for link in links {
                        tracing::debug!(title = %link.title, url = %link.url, "Not following external link");
                        summary.external_links += 1;
                    }
                },
                Err(err) => tracing::warn!(error = %err, "Could not read external links"),
            }
            summary.modules += 1;
        }
        Ok(())
    }
}
