//! Error types for package assembly.

use std::path::PathBuf;

use ectd_manifest::ManifestError;
use ectd_validate::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PackageError {
    /// The configuration failed structural validation.
    #[error("configuration is invalid ({} issue(s))", issues.len())]
    ConfigurationInvalid { issues: Vec<ValidationIssue> },

    /// Reference resolution, manifest building or XML rendering failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A document's `filePath` does not name a readable file.
    #[error("document {document_index}: source file '{}' not found", path.display())]
    SourceNotFound {
        document_index: usize,
        path: PathBuf,
    },

    /// The sequence directory already holds files from an earlier run.
    #[error("sequence directory '{}' is not empty", path.display())]
    SequenceNotEmpty { path: PathBuf },

    /// A line of a digest manifest could not be parsed.
    #[error("{}: line {line} is not '<sha256> *<path>'", path.display())]
    MalformedDigestManifest { path: PathBuf, line: usize },

    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PackageError>;

impl PackageError {
    /// Adapter for `map_err` that attaches the operation and path.
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            operation,
            path,
            source,
        }
    }

    /// Check if this error is recoverable (user can fix the input and retry).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationInvalid { .. }
            | Self::SourceNotFound { .. }
            | Self::SequenceNotEmpty { .. } => true,
            Self::Manifest(error) => error.is_configuration_error(),
            Self::MalformedDigestManifest { .. } | Self::Io { .. } => false,
        }
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigurationInvalid { .. } => {
                Some("Fix the listed fields; `ectd-generate sample-config` prints a valid example.")
            }
            Self::Manifest(ManifestError::UnresolvedKeywordReference { .. }) => {
                Some("Declare the keyword under `keywords` or remove it from `keywordRefs`.")
            }
            Self::Manifest(ManifestError::UnknownKeywordType { .. }) => Some(
                "Use one of studyId, productName, manufacturer, materialId or issueDate.",
            ),
            Self::SourceNotFound { .. } => {
                Some("Check the document's filePath, or omit it to generate a placeholder.")
            }
            Self::SequenceNotEmpty { .. } => {
                Some("Remove the existing sequence directory or raise sequenceNumber.")
            }
            Self::Io { .. } => Some("Check file permissions and available disk space."),
            Self::Manifest(_) | Self::MalformedDigestManifest { .. } => None,
        }
    }
}
