//! Filesystem-safe names for courses, modules and documents.

use rslug::slugify;

/// Maximum length (in bytes) of the slugged part of a document filename.
/// The extension is appended after truncation and doesn't count.
pub const STEM_LIMIT: usize = 155;

// Various quotation marks: '"''""„"`«»
const QUOTATION_MARKS: [char; 13] = [
    '\u{0027}', '\u{0022}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201B}', '\u{0060}',
    '\u{00AB}', '\u{00BB}', '\u{2039}', '\u{203A}',
];

/// Converts arbitrary text into a lowercase, hyphen-separated slug.
///
/// Quotation marks are stripped before slugifying so that `Dr. Smith's "Notes"`
/// doesn't end up with stray hyphens in the middle of words.
///
/// ```
/// use canvas_storage::slug;
/// assert_eq!(slug("Intro to Psychology (PSYCH 1101)"), "intro-to-psychology-psych-1101");
/// ```
pub fn slug(text: impl AsRef<str>) -> String {
    let stripped: String = text.as_ref().chars().filter(|c| !QUOTATION_MARKS.contains(c)).collect();
    slugify!(&stripped)
}

/// Derives a document's filename from its title.
///
/// Everything before the last `.` is slugged and capped at [`STEM_LIMIT`]
/// bytes; everything from the last `.` onwards is kept verbatim. A title
/// without any `.` is slugged whole and gets no extension.
///
/// ```
/// use canvas_storage::file_name;
/// assert_eq!(file_name("Ch4 Birth&Newborn!.pdf"), "ch4-birth-newborn.pdf");
/// assert_eq!(file_name("Syllabus"), "syllabus");
/// ```
pub fn file_name(title: impl AsRef<str>) -> String {
    let title = title.as_ref();
    match title.rfind('.') {
        Some(dot) => format!("{}{}", truncate(&slug(&title[..dot]), STEM_LIMIT), &title[dot..]),
        None => truncate(&slug(title), STEM_LIMIT).to_string(),
    }
}

/// Truncates at a character boundary so multibyte characters are never split.
fn truncate(s: &str, max_bytes: usize) -> &str {
    &s[..s.floor_char_boundary(max_bytes)]
}
