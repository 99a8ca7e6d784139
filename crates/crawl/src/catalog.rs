use crate::error::{ErrorKind, Result};
use canvas_extract::Html;
use canvas_extract::models::CourseEntry;
use canvas_session::{PageCache, Session};
use exn::ResultExt;
use tracing::instrument;

/// Site-relative location of the course listing.
pub const CATALOG_HREF: &str = "/courses";

/// The account's course listing: current enrollments, then past ones.
#[derive(Debug)]
pub struct CourseCatalog<'s> {
    session: &'s Session,
    page: PageCache<Html>,
}

impl<'s> CourseCatalog<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            page: PageCache::new(),
        }
    }

    /// Every course on the listing page, active enrollments first.
    ///
    /// The page is only requested once per catalog.
    #[instrument(level = "debug", skip(self))]
    pub fn list_courses(&self) -> Result<Vec<CourseEntry>> {
        let document = self
            .page
            .get_or_fetch(|| self.session.fetch(CATALOG_HREF).map(canvas_extract::parse))
            .or_raise(|| ErrorKind::Fetch(CATALOG_HREF.to_string()))?;
        let courses = canvas_extract::courses(document).or_raise(|| ErrorKind::Parse(CATALOG_HREF.to_string()))?;
        tracing::info!(count = courses.len(), "Found courses");
        Ok(courses)
    }
}
