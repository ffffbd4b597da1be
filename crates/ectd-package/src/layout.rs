//! Output tree layout: `<root>/<TYPE><number>/<sequence>/m1..m5`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ectd_manifest::MANIFEST_FILE_NAME;
use ectd_model::{CtdModule, SubmissionConfig};
use tracing::debug;

use crate::error::{PackageError, Result};
use crate::hash::DIGEST_MANIFEST_FILE_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPaths {
    pub output_root: PathBuf,
    pub application_dir: PathBuf,
    pub sequence_dir: PathBuf,
}

impl SubmissionPaths {
    pub fn new(output_root: &Path, config: &SubmissionConfig) -> Self {
        let application_dir = output_root.join(config.application_dir_name());
        let sequence_dir = application_dir.join(config.submission.sequence_number.to_string());
        Self {
            output_root: output_root.to_path_buf(),
            application_dir,
            sequence_dir,
        }
    }

    pub fn module_dir(&self, module: CtdModule) -> PathBuf {
        self.sequence_dir.join(module.as_str())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.sequence_dir.join(MANIFEST_FILE_NAME)
    }

    pub fn digest_manifest_path(&self) -> PathBuf {
        self.sequence_dir.join(DIGEST_MANIFEST_FILE_NAME)
    }

    /// Fail unless the sequence directory is absent or empty.
    ///
    /// Leftover files would otherwise be listed in `sha256.txt` without a
    /// matching document in `submissionunit.xml`.
    pub fn ensure_fresh(&self) -> Result<()> {
        let mut entries = match fs::read_dir(&self.sequence_dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(error) => {
                return Err(PackageError::io("read directory", &self.sequence_dir)(error));
            }
        };
        if entries.next().is_some() {
            return Err(PackageError::SequenceNotEmpty {
                path: self.sequence_dir.clone(),
            });
        }
        Ok(())
    }

    /// Create the sequence directory and all five module directories.
    pub fn create(&self) -> Result<()> {
        for module in CtdModule::ALL {
            let dir = self.module_dir(module);
            fs::create_dir_all(&dir).map_err(PackageError::io("create directory", &dir))?;
        }
        debug!(sequence_dir = %self.sequence_dir.display(), "created submission tree");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_only_when_sequence_dir_is_absent_or_empty() {
        let out = tempfile::tempdir().unwrap();
        let paths = SubmissionPaths::new(out.path(), &SubmissionConfig::sample());
        paths.ensure_fresh().unwrap();

        fs::create_dir_all(&paths.sequence_dir).unwrap();
        paths.ensure_fresh().unwrap();

        paths.create().unwrap();
        let error = paths.ensure_fresh().unwrap_err();
        assert!(matches!(
            error,
            PackageError::SequenceNotEmpty { ref path } if *path == paths.sequence_dir
        ));
    }
}
