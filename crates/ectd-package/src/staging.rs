//! Per-run staging directories.
//!
//! Each run builds into `<staging root>/<uuid>`; the directory is removed when
//! the [`StagingArea`] is dropped, whether or not the run succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{PackageError, Result};

#[derive(Debug)]
pub struct StagingArea {
    path: PathBuf,
}

impl StagingArea {
    /// Create a fresh, uniquely named directory under `root`.
    pub fn new(root: &Path) -> Result<Self> {
        let path = root.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&path).map_err(PackageError::io("create directory", &path))?;
        debug!(path = %path.display(), "created staging area");
        Ok(Self { path })
    }

    /// Staging area under the system temporary directory.
    pub fn in_temp_dir() -> Result<Self> {
        Self::new(&std::env::temp_dir().join("ectd-staging"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingArea {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed staging area"),
            Err(error) => warn!(
                path = %self.path.display(),
                error = %error,
                "failed to remove staging area"
            ),
        }
    }
}

/// Run `consume` against a fresh staging directory, then remove it.
pub fn with_staging<T, F>(root: &Path, consume: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let staging = StagingArea::new(root)?;
    consume(staging.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_after_success_and_failure() {
        let root = tempfile::tempdir().unwrap();

        let kept = with_staging(root.path(), |dir| {
            fs::write(dir.join("file.txt"), "x").unwrap();
            Ok(dir.to_path_buf())
        })
        .unwrap();
        assert!(!kept.exists());

        let mut seen = None;
        let result: Result<()> = with_staging(root.path(), |dir| {
            seen = Some(dir.to_path_buf());
            Err(PackageError::SourceNotFound {
                document_index: 0,
                path: PathBuf::from("missing.pdf"),
            })
        });
        assert!(result.is_err());
        assert!(!seen.unwrap().exists());
    }

    #[test]
    fn each_area_is_distinct() {
        let root = tempfile::tempdir().unwrap();
        let first = StagingArea::new(root.path()).unwrap();
        let second = StagingArea::new(root.path()).unwrap();
        assert_ne!(first.path(), second.path());
        assert!(first.path().is_dir());
    }
}
