//! Content files for documents.
//!
//! A document either points at an existing file (`filePath`), which is copied
//! into its module directory, or gets placeholder content from a
//! [`ContentGenerator`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ectd_manifest::ContentFileRecord;
use ectd_model::{Application, CtdModule, DocumentConfig, SubmissionConfig};
use tracing::{debug, info};

use crate::error::{PackageError, Result};
use crate::hash::{relative_path, sha256_file};
use crate::layout::SubmissionPaths;

/// What a generator is asked to produce content for.
#[derive(Debug, Clone, Copy)]
pub struct ContentRequest<'a> {
    pub document: &'a DocumentConfig,
    pub application: &'a Application,
    pub sequence_number: u32,
}

/// Produces placeholder content for documents without a source file.
pub trait ContentGenerator: Send + Sync {
    /// File extension, without the dot.
    fn extension(&self) -> &str;

    fn generate(&self, request: &ContentRequest<'_>, out: &mut dyn Write) -> io::Result<()>;
}

/// Minimal single-page PDF naming the document, application and sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPdf;

impl ContentGenerator for PlaceholderPdf {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn generate(&self, request: &ContentRequest<'_>, out: &mut dyn Write) -> io::Result<()> {
        let lines = [
            request.document.title.clone(),
            format!(
                "{} {} - Sequence {}",
                request.application.application_type,
                request.application.number,
                request.sequence_number
            ),
            request.application.sponsor.clone(),
            "Placeholder content".to_string(),
        ];
        out.write_all(&single_page_pdf(&lines))
    }
}

fn single_page_pdf(lines: &[String]) -> Vec<u8> {
    let mut text = String::from("BT\n/F1 14 Tf\n18 TL\n72 720 Td\n");
    for line in lines {
        text.push_str(&format!("({}) Tj T*\n", pdf_escape(line)));
    }
    text.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{text}endstream", text.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", index + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}

/// Escape a PDF literal string; non-ASCII characters become `?`.
fn pdf_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' '..='~' => escaped.push(ch),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Default file name for a generated document.
pub fn default_file_name(
    document: &DocumentConfig,
    application: &Application,
    sequence_number: u32,
    extension: &str,
) -> String {
    let number = &application.number;
    match document.doc_type.as_str() {
        "356h" => format!("356h_{number}_{sequence_number}.{extension}"),
        "cover" => format!("cover-{number}_{sequence_number}.{extension}"),
        "2253" => format!(
            "2253-{}{number}_{sequence_number}.{extension}",
            application.application_type.as_str().to_ascii_lowercase()
        ),
        _ => format!("{}.{extension}", sanitize_title(&document.title)),
    }
}

fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Hands out file names that are unique within each module directory.
#[derive(Debug, Default)]
pub struct FileNamer {
    used: HashMap<CtdModule, HashSet<String>>,
}

impl FileNamer {
    /// Claim `name` in `module`, appending `-2`, `-3`, ... to the stem on collision.
    ///
    /// Names compare ASCII case-insensitively, so `Report.pdf` and `report.pdf`
    /// never share a directory on case-folding file systems.
    pub fn claim(&mut self, module: CtdModule, name: &str) -> String {
        let used = self.used.entry(module).or_default();
        if used.insert(name.to_ascii_lowercase()) {
            return name.to_string();
        }
        let (stem, extension) = match name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
            _ => (name, None),
        };
        let mut counter = 2usize;
        loop {
            let candidate = match extension {
                Some(extension) => format!("{stem}-{counter}.{extension}"),
                None => format!("{stem}-{counter}"),
            };
            if used.insert(candidate.to_ascii_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Where a content file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Copied(PathBuf),
    Placeholder,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Copied(path) => write!(f, "copied from {}", path.display()),
            ContentSource::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// A content file written for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub record: ContentFileRecord,
    pub source: ContentSource,
}

/// Write content for every active document and hash it.
///
/// Suspended documents carry no content. Documents without `filePath` are
/// skipped when `generator` is `None`.
pub fn produce_content(
    config: &SubmissionConfig,
    paths: &SubmissionPaths,
    generator: Option<&dyn ContentGenerator>,
) -> Result<Vec<GeneratedFile>> {
    let mut namer = FileNamer::default();
    let mut files = Vec::new();

    for (index, document) in config.documents.iter().enumerate() {
        if !document.operation.effective_status().is_active() {
            debug!(document_index = index, "suspended document, no content");
            continue;
        }

        let module_dir = paths.module_dir(document.module);
        let (target, source) = match (&document.file_path, generator) {
            (Some(source_path), _) => {
                let name = source_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| {
                        default_file_name(
                            document,
                            &config.application,
                            config.submission.sequence_number,
                            "pdf",
                        )
                    });
                let target = module_dir.join(namer.claim(document.module, &name));
                if is_same_file(source_path, &target) {
                    debug!(
                        document_index = index,
                        path = %target.display(),
                        "source already in place"
                    );
                } else {
                    copy_file(source_path, &target)?;
                }
                (target, ContentSource::Copied(source_path.clone()))
            }
            (None, Some(generator)) => {
                let name = default_file_name(
                    document,
                    &config.application,
                    config.submission.sequence_number,
                    generator.extension(),
                );
                let target = module_dir.join(namer.claim(document.module, &name));
                let request = ContentRequest {
                    document,
                    application: &config.application,
                    sequence_number: config.submission.sequence_number,
                };
                write_generated(generator, &request, &target)?;
                (target, ContentSource::Placeholder)
            }
            (None, None) => {
                debug!(document_index = index, "no source file and placeholders disabled");
                continue;
            }
        };

        let digest = sha256_file(&target)?;
        let relative = relative_path(&paths.sequence_dir, &target);
        debug!(
            document_index = index,
            doc_type = %document.doc_type,
            path = %relative,
            "wrote content file"
        );
        files.push(GeneratedFile {
            record: ContentFileRecord {
                document_index: index,
                absolute_path: target,
                relative_path: relative,
                digest,
            },
            source,
        });
    }

    info!(file_count = files.len(), "content files written");
    Ok(files)
}

/// Whether both paths resolve to the same existing file.
fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let input = File::open(source).map_err(PackageError::io("open", source))?;
    let output = File::create(target).map_err(PackageError::io("create", target))?;
    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    io::copy(&mut reader, &mut writer).map_err(PackageError::io("copy", source))?;
    writer.flush().map_err(PackageError::io("write", target))?;
    Ok(())
}

fn write_generated(
    generator: &dyn ContentGenerator,
    request: &ContentRequest<'_>,
    target: &Path,
) -> Result<()> {
    let file = File::create(target).map_err(PackageError::io("create", target))?;
    let mut writer = BufWriter::new(file);
    generator
        .generate(request, &mut writer)
        .map_err(PackageError::io("write", target))?;
    writer.flush().map_err(PackageError::io("write", target))?;
    Ok(())
}

/// Check that every `filePath` names an existing file.
pub fn check_sources(config: &SubmissionConfig) -> Result<()> {
    for (index, document) in config.documents.iter().enumerate() {
        if let Some(path) = &document.file_path
            && document.operation.effective_status().is_active()
            && !fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
        {
            return Err(PackageError::SourceNotFound {
                document_index: index,
                path: path.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ectd_model::ApplicationType;

    fn application() -> Application {
        Application {
            application_type: ApplicationType::Anda,
            number: "654321".to_string(),
            sponsor: "Acme".to_string(),
        }
    }

    #[test]
    fn form_and_letter_names() {
        let application = application();
        let name = |doc_type: &str, title: &str| {
            default_file_name(
                &DocumentConfig::new(CtdModule::M1, doc_type, title),
                &application,
                3,
                "pdf",
            )
        };
        assert_eq!(name("356h", "Form"), "356h_654321_3.pdf");
        assert_eq!(name("cover", "Cover"), "cover-654321_3.pdf");
        assert_eq!(name("2253", "Transmittal"), "2253-anda654321_3.pdf");
        assert_eq!(
            name("labeling", "Draft Labeling (v2)"),
            "draft_labeling__v2_.pdf"
        );
    }

    #[test]
    fn namer_disambiguates_within_module_only() {
        let mut namer = FileNamer::default();
        assert_eq!(namer.claim(CtdModule::M3, "report.pdf"), "report.pdf");
        assert_eq!(namer.claim(CtdModule::M3, "report.pdf"), "report-2.pdf");
        assert_eq!(namer.claim(CtdModule::M3, "report.pdf"), "report-3.pdf");
        assert_eq!(namer.claim(CtdModule::M5, "report.pdf"), "report.pdf");
        assert_eq!(namer.claim(CtdModule::M5, "README"), "README");
        assert_eq!(namer.claim(CtdModule::M5, "README"), "README-2");
    }

    #[test]
    fn namer_ignores_ascii_case() {
        let mut namer = FileNamer::default();
        assert_eq!(namer.claim(CtdModule::M2, "Report.pdf"), "Report.pdf");
        assert_eq!(namer.claim(CtdModule::M2, "report.pdf"), "report-2.pdf");
        assert_eq!(namer.claim(CtdModule::M2, "REPORT-2.PDF"), "REPORT-3.PDF");
    }

    #[test]
    fn source_inside_module_dir_is_hashed_in_place() {
        let out = tempfile::tempdir().unwrap();
        let mut config = SubmissionConfig::sample();
        config.keywords.clear();
        let paths = SubmissionPaths::new(out.path(), &config);
        paths.create().unwrap();

        let source = paths.module_dir(CtdModule::M3).join("report.pdf");
        fs::write(&source, b"precious bytes").unwrap();
        config.documents = vec![
            DocumentConfig::new(CtdModule::M3, "report", "Report").with_file_path(&source),
        ];

        let files = produce_content(&config, &paths, None).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].record.absolute_path, source);
        assert_eq!(files[0].record.relative_path, "m3/report.pdf");
        assert_eq!(fs::read(&source).unwrap(), b"precious bytes");
        assert_eq!(
            files[0].record.digest,
            crate::hash::sha256_bytes(b"precious bytes")
        );
    }

    #[test]
    fn placeholder_is_a_pdf_with_valid_xref() {
        let document = DocumentConfig::new(CtdModule::M1, "cover", "Cover (Letter)");
        let application = application();
        let request = ContentRequest {
            document: &document,
            application: &application,
            sequence_number: 1,
        };
        let mut out = Vec::new();
        PlaceholderPdf.generate(&request, &mut out).unwrap();
        let pdf = String::from_utf8(out).unwrap();

        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.ends_with("%%EOF\n"));
        assert!(pdf.contains("(Cover \\(Letter\\)) Tj"));
        assert!(pdf.contains("(ANDA 654321 - Sequence 1) Tj"));

        let startxref: usize = pdf
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|line| line.parse().ok())
            .unwrap();
        assert!(pdf[startxref..].starts_with("xref\n0 6\n"));

        let catalog_offset = pdf.find("1 0 obj").unwrap();
        assert!(pdf.contains(&format!("{catalog_offset:010} 00000 n \n")));
    }

    #[test]
    fn pdf_escape_replaces_non_ascii() {
        assert_eq!(pdf_escape("Étude \\ 1"), "?tude \\\\ 1");
    }
}
