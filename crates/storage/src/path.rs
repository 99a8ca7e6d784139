//! Path validation.
//!
//! Slugs can't contain separators, but document extensions are copied
//! verbatim from the remote title, so every relative path is checked before
//! it's joined onto the output directory.

use std::path::{Component, Path, PathBuf};

use crate::error::{ErrorKind, Result};

/// Validates a storage path built from course, module and file names.
///
/// Only relative paths are accepted. `.` segments are dropped and `..` may
/// only cancel a segment that came before it. Null bytes are rejected, as are
/// paths that normalize to nothing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use canvas_storage::validate_path;
/// assert!(validate_path("psych-1101/week-1/notes.pdf").is_ok());
/// assert!(validate_path("../etc/passwd").is_err());
/// assert!(validate_path("/etc/passwd").is_err());
/// assert_eq!(validate_path("./psych-1101//week-1/").unwrap(), Path::new("psych-1101/week-1"));
/// ```
pub fn validate(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            // Null bytes survive `components()` but truncate paths in syscalls.
            Component::Normal(segment) if !segment.as_encoded_bytes().contains(&0) => normalized.push(segment),
            Component::ParentDir if normalized.pop() => {},
            _ => exn::bail!(ErrorKind::InvalidPath(path.to_path_buf())),
        }
    }
    if normalized.as_os_str().is_empty() {
        exn::bail!(ErrorKind::InvalidPath(path.to_path_buf()));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("psych-1101/week-1/notes.pdf", "psych-1101/week-1/notes.pdf")]
    #[case("psych-1101//week-1", "psych-1101/week-1")]
    #[case("./psych-1101/./week-1/", "psych-1101/week-1")]
    #[case("psych-1101/week-1/..", "psych-1101")]
    fn test_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate(input).unwrap(), Path::new(expected));
    }

    #[rstest]
    #[case("../etc/passwd")]
    #[case("week-1/../../notes.pdf")]
    #[case("..")]
    #[case("a\0b")]
    #[case("/psych-1101")]
    #[case("psych-1101/..")]
    #[case("")]
    #[case(".")]
    #[case("//")]
    fn test_invalid(#[case] input: &str) {
        let err = validate(input).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidPath(_)));
    }

    #[test]
    fn test_extension_cannot_traverse() {
        // A title like "notes./../../../../x" keeps its "extension" verbatim.
        let name = "notes./../../../../x";
        assert!(validate(Path::new("course/module").join(name)).is_err());
    }
}
