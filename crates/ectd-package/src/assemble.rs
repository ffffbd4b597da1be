//! Package assembly: configuration in, submission tree out.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use ectd_manifest::{
    BuildWarning, ContentFileRecord, ResolvedSubmission, SerializeOptions, build_manifest,
    resolve_submission, write_document,
};
use ectd_model::{ContextStatus, CtdModule, SubmissionConfig, SubmissionIds};
use ectd_validate::validate_config;
use tracing::{info, info_span};

use crate::content::{
    ContentGenerator, ContentSource, GeneratedFile, PlaceholderPdf, check_sources,
    produce_content,
};
use crate::error::{PackageError, Result};
use crate::hash::{FileDigest, write_digest_manifest};
use crate::layout::SubmissionPaths;

/// Build options.
pub struct PackageOptions {
    /// Generate placeholder content for documents without `filePath`.
    pub generate_placeholders: bool,
    pub generator: Box<dyn ContentGenerator>,
    pub serialize: SerializeOptions,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            generate_placeholders: true,
            generator: Box::new(PlaceholderPdf),
            serialize: SerializeOptions::default(),
        }
    }
}

impl fmt::Debug for PackageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageOptions")
            .field("generate_placeholders", &self.generate_placeholders)
            .field("generator", &self.generator.extension())
            .field("serialize", &self.serialize)
            .finish()
    }
}

impl PackageOptions {
    #[must_use]
    pub fn with_placeholders(mut self, enabled: bool) -> Self {
        self.generate_placeholders = enabled;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: impl ContentGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }
}

/// Per-document outcome, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub index: usize,
    pub module: CtdModule,
    pub doc_type: String,
    pub title: String,
    pub section_key: &'static str,
    pub section_name: &'static str,
    pub section_defaulted: bool,
    pub status: ContextStatus,
    /// Content path relative to the sequence directory.
    pub file: Option<String>,
    pub source: Option<ContentSource>,
}

#[derive(Debug, Clone)]
pub struct PackageOutput {
    pub paths: SubmissionPaths,
    pub manifest_path: PathBuf,
    pub digest_manifest_path: PathBuf,
    pub files: Vec<GeneratedFile>,
    /// Entries written to the digest manifest.
    pub digests: Vec<FileDigest>,
    pub documents: Vec<DocumentSummary>,
    pub warnings: Vec<BuildWarning>,
}

impl PackageOutput {
    pub fn generated_file_count(&self) -> usize {
        self.files.len()
    }
}

/// Everything that can fail on configuration content, without writing.
///
/// Returns the resolved view, including non-fatal warnings.
pub fn check_submission(config: &SubmissionConfig) -> Result<ResolvedSubmission> {
    let issues = validate_config(config);
    if !issues.is_empty() {
        return Err(PackageError::ConfigurationInvalid { issues });
    }
    let resolved = resolve_submission(config)?;
    check_sources(config)?;
    Ok(resolved)
}

/// Generate the submission tree for `config` under `output_root`.
///
/// The sequence directory must be absent or empty; an earlier run of the same
/// sequence is refused with [`PackageError::SequenceNotEmpty`] before anything
/// is written.
pub fn generate_submission(
    config: &SubmissionConfig,
    output_root: &Path,
    options: &PackageOptions,
) -> Result<PackageOutput> {
    let span = info_span!(
        "generate_submission",
        application = %config.application_dir_name(),
        sequence = config.submission.sequence_number
    );
    let _guard = span.enter();
    let start = Instant::now();

    let resolved = check_submission(config)?;
    let ids = SubmissionIds::assign(config);

    let paths = SubmissionPaths::new(output_root, config);
    paths.ensure_fresh()?;
    paths.create()?;

    let generator = options
        .generate_placeholders
        .then_some(options.generator.as_ref());
    let files = produce_content(config, &paths, generator)?;
    let records: Vec<ContentFileRecord> = files.iter().map(|file| file.record.clone()).collect();

    let manifest = build_manifest(config, &resolved, &ids, &records)?;
    let manifest_path = paths.manifest_path();
    let file =
        File::create(&manifest_path).map_err(PackageError::io("create", &manifest_path))?;
    let mut writer = BufWriter::new(file);
    write_document(&manifest, &mut writer, options.serialize)?;
    writer
        .flush()
        .map_err(PackageError::io("write", &manifest_path))?;
    info!(path = %manifest_path.display(), "wrote submission manifest");

    let (digest_manifest_path, digests) = write_digest_manifest(&paths.sequence_dir)?;
    let documents = summarize(config, &resolved, &files);

    info!(
        file_count = files.len(),
        warning_count = resolved.warnings.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "submission package generated"
    );

    Ok(PackageOutput {
        paths,
        manifest_path,
        digest_manifest_path,
        files,
        digests,
        documents,
        warnings: resolved.warnings,
    })
}

fn summarize(
    config: &SubmissionConfig,
    resolved: &ResolvedSubmission,
    files: &[GeneratedFile],
) -> Vec<DocumentSummary> {
    config
        .documents
        .iter()
        .zip(&resolved.documents)
        .map(|(document, resolution)| {
            let file = files
                .iter()
                .find(|file| file.record.document_index == resolution.index);
            DocumentSummary {
                index: resolution.index,
                module: document.module,
                doc_type: document.doc_type.clone(),
                title: document.title.clone(),
                section_key: resolution.section.key,
                section_name: resolution.section.name,
                section_defaulted: resolution.section_defaulted,
                status: resolution.status,
                file: file.map(|file| file.record.relative_path.clone()),
                source: file.map(|file| file.source.clone()),
            }
        })
        .collect()
}
