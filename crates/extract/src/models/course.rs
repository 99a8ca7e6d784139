use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which listing on the courses page a course was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enrollment {
    /// Current enrollments (`#my_courses_table`)
    Active,
    /// Past enrollments (`#past_enrollments_table`)
    Past,
}
impl Enrollment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Enrollment::Active => "active",
            Enrollment::Past => "past",
        }
    }
}
impl Display for Enrollment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A course row from the courses listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseEntry {
    /// Display name of the course
    pub name: String,
    /// Link to the course, usually relative (`/courses/12345`)
    pub href: String,
    pub enrollment: Enrollment,
}
impl CourseEntry {
    pub fn new(name: impl Into<String>, href: impl Into<String>, enrollment: Enrollment) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            enrollment,
        }
    }

    /// The trailing path segment of the course link, which Canvas uses as
    /// the numeric course ID.
    pub fn id(&self) -> Option<&str> {
        self.href.trim_end_matches('/').rsplit('/').next().filter(|s| !s.is_empty())
    }
}
impl Display for CourseEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}, {}>", self.name, self.href)
    }
}
