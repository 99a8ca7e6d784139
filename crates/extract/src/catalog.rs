use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{CourseEntry, Enrollment};
use exn::OptionExt;
use scraper::{ElementRef, Html, Selector};
use tracing::instrument;

/// Extracts every course link from the courses listing page.
///
/// Current enrollments come first, then past enrollments, each in the order
/// they appear in the page. There's no pagination; Canvas renders every row
/// into the one document.
///
/// # Errors
///
/// Returns an error if a course link has no `href`, or has neither a `title`
/// attribute nor any text to name it by.
#[instrument(level = "debug", skip(document))]
pub fn courses(document: &Html) -> Result<Vec<CourseEntry>> {
    let mut courses = listing(document, &consts::ACTIVE_COURSES_SELECTOR, Enrollment::Active)?;
    courses.extend(listing(document, &consts::PAST_COURSES_SELECTOR, Enrollment::Past)?);
    tracing::debug!(count = courses.len(), "Extracted courses from catalog");
    Ok(courses)
}

fn listing(document: &Html, selector: &Selector, enrollment: Enrollment) -> Result<Vec<CourseEntry>> {
    document.select(selector).map(|anchor| course(anchor, enrollment)).collect()
}

fn course(anchor: ElementRef<'_>, enrollment: Enrollment) -> Result<CourseEntry> {
    let href = anchor.attr("href").ok_or_raise(|| ErrorKind::MissingAttribute {
        element: "course link",
        attribute: "href",
    })?;
    // The visible text is sometimes abbreviated; the title attribute has the full name.
    let name = anchor
        .attr("title")
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .or_else(|| Some(crate::text_of(&anchor)).filter(|text| !text.is_empty()))
        .ok_or_raise(|| ErrorKind::MissingAttribute {
            element: "course link",
            attribute: "title",
        })?;
    Ok(CourseEntry::new(name, href, enrollment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(active: &str, past: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body>
                <table id="my_courses_table"><tbody>{active}</tbody></table>
                <table id="past_enrollments_table"><tbody>{past}</tbody></table>
            </body></html>"#
        ))
    }

    fn row(name: &str, href: &str) -> String {
        format!(r#"<tr><td class="star-column"></td><td><a href="{href}" title="{name}"><span>{name}</span></a></td></tr>"#)
    }

    #[test]
    fn test_active_then_past() {
        let document = catalog(
            &[row("Intro to Psychology (PSYCH 1101)", "/courses/1"), row("Linear Algebra", "/courses/2")].concat(),
            &[row("Old Course", "/courses/3")].concat(),
        );
        let courses = courses(&document).unwrap();
        assert_eq!(
            courses,
            vec![
                CourseEntry::new("Intro to Psychology (PSYCH 1101)", "/courses/1", Enrollment::Active),
                CourseEntry::new("Linear Algebra", "/courses/2", Enrollment::Active),
                CourseEntry::new("Old Course", "/courses/3", Enrollment::Past),
            ]
        );
    }

    #[test]
    fn test_counts_add_up() {
        let active: Vec<_> = (0..4).map(|i| row(&format!("A{i}"), &format!("/courses/{i}"))).collect();
        let past: Vec<_> = (10..13).map(|i| row(&format!("P{i}"), &format!("/courses/{i}"))).collect();
        let courses = courses(&catalog(&active.concat(), &past.concat())).unwrap();
        assert_eq!(courses.len(), 7);
        assert!(courses[..4].iter().all(|c| c.enrollment == Enrollment::Active));
        assert!(courses[4..].iter().all(|c| c.enrollment == Enrollment::Past));
    }

    #[test]
    fn test_implicit_tbody() {
        // The HTML parser inserts `tbody` even when the markup omits it.
        let document = Html::parse_document(
            r#"<table id="my_courses_table"><tr><td><a href="/courses/9" title="Nine">9</a></td></tr></table>"#,
        );
        let courses = courses(&document).unwrap();
        assert_eq!(courses, vec![CourseEntry::new("Nine", "/courses/9", Enrollment::Active)]);
    }

    #[test]
    fn test_name_falls_back_to_text() {
        let document = catalog(r#"<tr><td><a href="/courses/5"> Chemistry </a></td></tr>"#, "");
        assert_eq!(courses(&document).unwrap()[0].name, "Chemistry");
    }

    #[test]
    fn test_missing_past_table() {
        let document = Html::parse_document(
            r#"<table id="my_courses_table"><tbody><tr><td><a href="/courses/1" title="One">1</a></td></tr></tbody></table>"#,
        );
        assert_eq!(courses(&document).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_href() {
        let document = catalog(r#"<tr><td><a title="Broken">Broken</a></td></tr>"#, "");
        let err = courses(&document).unwrap_err();
        assert_eq!(*err, ErrorKind::MissingAttribute { element: "course link", attribute: "href" });
    }

    #[test]
    fn test_empty_page() {
        let document = Html::parse_document("<html><body><p>Log in to Canvas</p></body></html>");
        assert!(courses(&document).unwrap().is_empty());
    }
}
