//! End-to-end package generation tests.

use std::fs;
use std::path::Path;

use ectd_manifest::ManifestError;
use ectd_model::{CtdModule, DocumentConfig, Operation, SubmissionConfig};
use ectd_package::{
    ContentSource, DIGEST_MANIFEST_FILE_NAME, PackageError, PackageOptions, generate_submission,
    sha256_file, verify_digest_manifest, with_staging,
};
use tempfile::TempDir;

fn single_document(document: DocumentConfig) -> SubmissionConfig {
    let mut config = SubmissionConfig::sample();
    config.documents = vec![document];
    config.keywords.clear();
    config
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn sample_package_layout() {
    let out = TempDir::new().unwrap();
    let config = SubmissionConfig::sample();
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    let sequence_dir = out.path().join("NDA123456").join("1");
    assert_eq!(output.paths.sequence_dir, sequence_dir);
    for module in ["m1", "m2", "m3", "m4", "m5"] {
        assert!(sequence_dir.join(module).is_dir(), "{module} missing");
    }
    assert_eq!(output.manifest_path, sequence_dir.join("submissionunit.xml"));
    assert!(output.manifest_path.is_file());
    assert_eq!(
        output.digest_manifest_path,
        sequence_dir.join(DIGEST_MANIFEST_FILE_NAME)
    );
    assert_eq!(output.generated_file_count(), 4);
    assert!(output.warnings.is_empty());

    let files: Vec<&str> = output
        .documents
        .iter()
        .filter_map(|document| document.file.as_deref())
        .collect();
    assert_eq!(
        files,
        vec![
            "m1/356h_123456_1.pdf",
            "m1/cover-123456_1.pdf",
            "m3/product_information.pdf",
            "m5/bioavailability_study_report.pdf",
        ]
    );
    assert_eq!(output.documents[2].section_key, "m3.2.p.2.2");

    let lines = read_lines(&output.digest_manifest_path);
    assert_eq!(lines.len(), 4);
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
    assert!(lines.iter().all(|line| !line.contains("submissionunit.xml")));
    assert!(fs::read_to_string(&output.digest_manifest_path)
        .unwrap()
        .ends_with('\n'));

    let cover = sequence_dir.join("m1/cover-123456_1.pdf");
    let cover_digest = sha256_file(&cover).unwrap();
    assert!(lines.contains(&format!("{cover_digest} *m1/cover-123456_1.pdf")));

    let xml = fs::read_to_string(&output.manifest_path).unwrap();
    assert!(xml.contains(&format!("<integrityCheck>{cover_digest}</integrityCheck>")));
    assert!(xml.contains("<reference value=\"m1/cover-123456_1.pdf\"/>"));

    let verification = verify_digest_manifest(&sequence_dir).unwrap();
    assert!(verification.is_valid());
    assert_eq!(verification.verified, 4);
}

#[test]
fn single_356h_document_has_one_digest_line() {
    let out = TempDir::new().unwrap();
    let config = single_document(DocumentConfig::new(CtdModule::M1, "356h", "Form FDA 356h"));
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    assert_eq!(read_lines(&output.digest_manifest_path).len(), 1);
    let xml = fs::read_to_string(&output.manifest_path).unwrap();
    assert_eq!(xml.matches("<contextOfUse>").count(), 1);
    assert_eq!(xml.matches("<document>").count(), 1);
    assert!(xml.contains("code=\"us_form_type_2\""));
}

#[test]
fn second_sequence_is_an_amendment() {
    let out = TempDir::new().unwrap();
    let mut config = SubmissionConfig::sample();
    config.submission.sequence_number = 2;
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    assert!(output.paths.sequence_dir.ends_with("NDA123456/2"));
    let xml = fs::read_to_string(&output.manifest_path).unwrap();
    assert!(xml.contains("code=\"us_submission_unit_type_4\""));
}

#[test]
fn unresolved_keyword_reference_writes_nothing() {
    let out = TempDir::new().unwrap();
    let mut config = SubmissionConfig::sample();
    config.documents[2].keyword_refs.push("MANU_404".to_string());

    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        PackageError::Manifest(ManifestError::UnresolvedKeywordReference {
            document_index: 2,
            ..
        })
    ));
    assert!(error.is_recoverable());
    assert!(error.suggestion().is_some());
    assert!(is_empty_dir(out.path()));
}

#[test]
fn replace_without_replaces_id_fails_validation() {
    let out = TempDir::new().unwrap();
    let config = single_document(
        DocumentConfig::new(CtdModule::M1, "cover", "Cover Letter")
            .with_operation(Operation::Replace),
    );

    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    let issues = match error {
        PackageError::ConfigurationInvalid { issues } => issues,
        other => panic!("expected configuration error, got {other:?}"),
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].location, "/documents/0/replacesId");
    assert!(is_empty_dir(out.path()));
}

#[test]
fn control_character_in_title_writes_nothing() {
    let out = TempDir::new().unwrap();
    let config = single_document(DocumentConfig::new(
        CtdModule::M3,
        "drug_product",
        "Bad\u{1}Title",
    ));

    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    let issues = match error {
        PackageError::ConfigurationInvalid { issues } => issues,
        other => panic!("expected configuration error, got {other:?}"),
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].location, "/documents/0/title");
    assert!(is_empty_dir(out.path()));
}

#[test]
fn existing_sequence_is_not_regenerated() {
    let out = TempDir::new().unwrap();
    let mut config = single_document(DocumentConfig::new(CtdModule::M3, "quality", "Alpha"));
    generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();
    let sequence_dir = out.path().join("NDA123456").join("1");
    let digest_manifest = sequence_dir.join(DIGEST_MANIFEST_FILE_NAME);
    let digests_before = fs::read_to_string(&digest_manifest).unwrap();

    config.documents[0].title = "Beta".to_string();
    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        PackageError::SequenceNotEmpty { ref path } if *path == sequence_dir
    ));
    assert!(error.is_recoverable());
    assert!(error.suggestion().is_some());
    assert!(sequence_dir.join("m3/alpha.pdf").is_file());
    assert!(!sequence_dir.join("m3/beta.pdf").exists());
    assert_eq!(fs::read_to_string(&digest_manifest).unwrap(), digests_before);

    config.submission.sequence_number = 2;
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();
    assert_eq!(read_lines(&output.digest_manifest_path).len(), 1);
    assert!(output.paths.sequence_dir.join("m3/beta.pdf").is_file());
}

#[test]
fn source_inside_existing_sequence_is_left_intact() {
    let out = TempDir::new().unwrap();
    let module_dir = out.path().join("NDA123456").join("1").join("m3");
    fs::create_dir_all(&module_dir).unwrap();
    let source = module_dir.join("report.pdf");
    fs::write(&source, b"precious bytes").unwrap();

    let config = single_document(
        DocumentConfig::new(CtdModule::M3, "report", "Report").with_file_path(&source),
    );
    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    assert!(matches!(error, PackageError::SequenceNotEmpty { .. }));
    assert_eq!(fs::read(&source).unwrap(), b"precious bytes");
}

#[test]
fn source_files_are_copied() {
    let out = TempDir::new().unwrap();
    let sources = TempDir::new().unwrap();
    let source = sources.path().join("clinical-overview.pdf");
    fs::write(&source, b"%PDF-1.4 real content").unwrap();

    let config = single_document(
        DocumentConfig::new(CtdModule::M2, "clinical_overview", "Clinical Overview")
            .with_file_path(&source),
    );
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    let generated = &output.files[0];
    assert_eq!(generated.record.relative_path, "m2/clinical-overview.pdf");
    assert_eq!(generated.source, ContentSource::Copied(source.clone()));
    assert_eq!(generated.record.digest, sha256_file(&source).unwrap());
    assert_eq!(
        fs::read(&generated.record.absolute_path).unwrap(),
        b"%PDF-1.4 real content"
    );

    assert_eq!(output.warnings.len(), 1);
    assert!(output.documents[0].section_defaulted);
}

#[test]
fn missing_source_file_writes_nothing() {
    let out = TempDir::new().unwrap();
    let config = single_document(
        DocumentConfig::new(CtdModule::M2, "overview", "Overview")
            .with_file_path(out.path().join("absent.pdf")),
    );
    let error = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        PackageError::SourceNotFound {
            document_index: 0,
            ..
        }
    ));
    assert!(is_empty_dir(out.path()));
}

#[test]
fn without_placeholders_no_content_is_written() {
    let out = TempDir::new().unwrap();
    let config = SubmissionConfig::sample();
    let options = PackageOptions::default().with_placeholders(false);
    let output = generate_submission(&config, out.path(), &options).unwrap();

    assert_eq!(output.generated_file_count(), 0);
    assert_eq!(
        fs::read_to_string(&output.digest_manifest_path).unwrap(),
        ""
    );
    let xml = fs::read_to_string(&output.manifest_path).unwrap();
    assert_eq!(xml.matches("<contextOfUse>").count(), 4);
    assert_eq!(xml.matches("<document>").count(), 0);
}

#[test]
fn deleted_documents_get_no_content() {
    let out = TempDir::new().unwrap();
    let config = single_document(
        DocumentConfig::new(CtdModule::M1, "cover", "Cover Letter")
            .with_operation(Operation::Delete),
    );
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    assert!(output.files.is_empty());
    assert!(output.documents[0].file.is_none());
    let xml = fs::read_to_string(&output.manifest_path).unwrap();
    assert!(xml.contains("<statusCode code=\"suspended\"/>"));
    assert!(!xml.contains("<derivedFrom>"));
}

#[test]
fn duplicate_titles_get_distinct_files() {
    let out = TempDir::new().unwrap();
    let mut config = SubmissionConfig::sample();
    config.keywords.clear();
    config.documents = vec![
        DocumentConfig::new(CtdModule::M3, "drug_product", "Drug Product"),
        DocumentConfig::new(CtdModule::M3, "drug_product", "Drug Product"),
    ];
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();

    let files: Vec<&str> = output
        .files
        .iter()
        .map(|file| file.record.relative_path.as_str())
        .collect();
    assert_eq!(files, vec!["m3/drug_product.pdf", "m3/drug_product-2.pdf"]);
    assert_eq!(read_lines(&output.digest_manifest_path).len(), 2);
}

#[test]
fn verification_reports_tampering() {
    let out = TempDir::new().unwrap();
    let config = SubmissionConfig::sample();
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();
    let sequence_dir = &output.paths.sequence_dir;

    fs::write(sequence_dir.join("m1/cover-123456_1.pdf"), b"changed").unwrap();
    fs::remove_file(sequence_dir.join("m5/bioavailability_study_report.pdf")).unwrap();

    let verification = verify_digest_manifest(sequence_dir).unwrap();
    assert!(!verification.is_valid());
    assert_eq!(verification.verified, 2);
    assert_eq!(verification.mismatched, vec!["m1/cover-123456_1.pdf"]);
    assert_eq!(
        verification.missing,
        vec!["m5/bioavailability_study_report.pdf"]
    );
}

#[test]
fn nested_files_named_like_manifests_are_hashed() {
    let out = TempDir::new().unwrap();
    let sources = TempDir::new().unwrap();
    let source = sources.path().join(DIGEST_MANIFEST_FILE_NAME);
    fs::write(&source, b"not the package digest").unwrap();

    let config = single_document(
        DocumentConfig::new(CtdModule::M1, "cover", "Cover Letter").with_file_path(&source),
    );
    let output = generate_submission(&config, out.path(), &PackageOptions::default()).unwrap();
    let lines = read_lines(&output.digest_manifest_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" *m1/sha256.txt"));
}

#[test]
fn staged_generation_is_cleaned_up() {
    let staging_root = TempDir::new().unwrap();
    let config = SubmissionConfig::sample();

    let (sequence_dir, file_count) = with_staging(staging_root.path(), |dir| {
        let output = generate_submission(&config, dir, &PackageOptions::default())?;
        assert!(output.manifest_path.is_file());
        let count = output.generated_file_count();
        Ok((output.paths.sequence_dir, count))
    })
    .unwrap();

    assert_eq!(file_count, 4);
    assert!(!sequence_dir.exists());
    assert!(is_empty_dir(staging_root.path()));
}
