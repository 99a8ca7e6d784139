mod course;
mod detail;
mod link;

pub use self::course::{CourseEntry, Enrollment};
pub use self::detail::DetailPage;
pub use self::link::{AttachmentRef, ExternalLinkRef};
