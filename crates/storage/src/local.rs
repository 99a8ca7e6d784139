//! Local filesystem storage.

use crate::error::{ErrorKind, Result};
use crate::path::validate as validate_path;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Output directory on the local filesystem.
///
/// All paths handed to it are relative to the configured root. The root
/// itself isn't created up front; directories are created as downloads
/// need them.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}
impl LocalBackend {
    /// Create a new local filesystem backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute, or exists but isn't a
    /// directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_absolute() || (root.exists() && !root.is_dir()) {
            exn::bail!(ErrorKind::InvalidPath(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the absolute path for a relative storage path.
    pub fn absolute_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let validated = validate_path(path.as_ref())?;
        Ok(self.root.join(validated))
    }

    /// Recursively creates a directory; succeeds if it already exists.
    pub fn create_dir_all(&self, path: &Path) -> Result<()> {
        let abs_path = self.absolute_path(path)?;
        tracing::trace!(path = %abs_path.display(), "Ensuring directory exists");
        Ok(fs::create_dir_all(&abs_path).map_err(|e| Self::map_io_error(e, path))?)
    }

    pub fn exists(&self, path: &Path) -> Result<bool> {
        let abs_path = self.absolute_path(path)?;
        Ok(fs::exists(&abs_path).map_err(|e| Self::map_io_error(e, path))?)
    }

    /// Creates (or truncates) a file for writing. The parent directory must
    /// already exist.
    pub fn create(&self, path: &Path) -> Result<File> {
        let abs_path = self.absolute_path(path)?;
        tracing::trace!(path = %abs_path.display(), "Creating file");
        Ok(File::create(&abs_path).map_err(|e| Self::map_io_error(e, path))?)
    }

    fn map_io_error(e: std::io::Error, path: &Path) -> ErrorKind {
        match e.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied(path.to_path_buf()),
            _ => ErrorKind::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_requires_absolute_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(LocalBackend::new(temp_dir.path()).is_ok());
        assert!(LocalBackend::new("relative/path").is_err());
        assert!(LocalBackend::new("./courses").is_err());
    }

    #[test]
    fn test_new_does_not_create_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("courses");
        LocalBackend::new(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_new_rejects_file_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("courses");
        fs::write(&file, b"not a directory").unwrap();
        assert!(LocalBackend::new(&file).is_err());
    }

    #[test]
    fn test_absolute_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(temp_dir.path()).unwrap();
        let expected = temp_dir.path().join("psych/week-1/notes.pdf");
        assert_eq!(backend.absolute_path("psych/week-1/notes.pdf").unwrap(), expected);
        assert!(backend.absolute_path("../etc/passwd").is_err());
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(temp_dir.path().join("courses")).unwrap();
        let dir = Path::new("psych/week-1");
        backend.create_dir_all(dir).unwrap();
        backend.create_dir_all(dir).unwrap();
        assert!(temp_dir.path().join("courses/psych/week-1").is_dir());
    }

    #[test]
    fn test_create_and_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(temp_dir.path()).unwrap();
        let path = Path::new("psych/notes.pdf");
        assert!(!backend.exists(path).unwrap());
        backend.create_dir_all(Path::new("psych")).unwrap();
        backend.create(path).unwrap().write_all(b"%PDF-1.7").unwrap();
        assert!(backend.exists(path).unwrap());
        assert_eq!(fs::read(temp_dir.path().join(path)).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_create_without_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(temp_dir.path()).unwrap();
        let err = backend.create(Path::new("missing/notes.pdf")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[test]
    fn test_path_security() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(temp_dir.path()).unwrap();
        assert!(backend.exists(Path::new("../etc/passwd")).is_err());
        assert!(backend.create(Path::new("a/../../b")).is_err());
        assert!(backend.create_dir_all(Path::new("..")).is_err());
    }
}
