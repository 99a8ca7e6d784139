use crate::error::{ErrorKind, Result};
use canvas_extract::models::CourseEntry;
use canvas_extract::{Html, ModuleEntry};
use canvas_session::{PageCache, Session};
use exn::ResultExt;
use std::path::PathBuf;
use tracing::instrument;

/// One course's modules page.
#[derive(Debug)]
pub struct CoursePage<'s> {
    session: &'s Session,
    course: CourseEntry,
    page: PageCache<Html>,
}

impl<'s> CoursePage<'s> {
    pub fn new(session: &'s Session, course: CourseEntry) -> Self {
        Self {
            session,
            course,
            page: PageCache::new(),
        }
    }

    pub fn course(&self) -> &CourseEntry {
        &self.course
    }

    pub fn href(&self) -> String {
        format!("{}/modules", self.course.href.trim_end_matches('/'))
    }

    /// Output directory for this course, relative to the storage root.
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(canvas_storage::slug(&self.course.name))
    }

    /// Every module on the page, in page order.
    ///
    /// The page is requested on first use and kept for the life of this
    /// `CoursePage`; the returned modules borrow their items from it.
    #[instrument(level = "debug", skip(self), fields(course = %self.course.name))]
    pub fn list_modules(&self) -> Result<Vec<ModuleEntry<'_>>> {
        let href = self.href();
        let document = self
            .page
            .get_or_fetch(|| self.session.fetch(&href).map(canvas_extract::parse))
            .or_raise(|| ErrorKind::Fetch(href.clone()))?;
        let modules = canvas_extract::modules(document).or_raise(|| ErrorKind::Parse(href.clone()))?;
        tracing::debug!(count = modules.len(), "Found modules");
        Ok(modules)
    }
}
