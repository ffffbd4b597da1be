use std::path::PathBuf;

use ectd_manifest::BuildWarning;
use ectd_package::{DigestVerification, PackageOutput};
use ectd_validate::ValidationIssue;

#[derive(Debug)]
pub struct GenerateResult {
    pub output: PackageOutput,
    /// Rendered sequence directory, captured before a dry run is discarded.
    pub tree: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct ValidateReport {
    pub issues: Vec<ValidationIssue>,
    /// Reference or source file failure found after structural validation passed.
    pub resolution_error: Option<String>,
    pub suggestion: Option<&'static str>,
    pub warnings: Vec<BuildWarning>,
    pub document_count: usize,
}

impl ValidateReport {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty() || self.resolution_error.is_some()
    }
}

#[derive(Debug)]
pub struct VerifyResult {
    pub dir: PathBuf,
    pub verification: DigestVerification,
}
