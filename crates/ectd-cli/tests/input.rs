//! Configuration loading and tree rendering through the CLI library.

use std::fs;
use std::path::Path;

use ectd_cli::input::{ConfigSource, format_issues};
use ectd_cli::tree::render_tree;
use ectd_model::SubmissionConfig;
use ectd_package::{PackageOptions, generate_submission};
use ectd_validate::ValidationIssue;
use tempfile::TempDir;

#[test]
fn sample_flag_wins_over_input() {
    let path = Path::new("config.json");
    assert_eq!(
        ConfigSource::from_args(Some(path), true),
        Some(ConfigSource::Sample)
    );
    assert_eq!(
        ConfigSource::from_args(Some(path), false),
        Some(ConfigSource::File(path.to_path_buf()))
    );
    assert_eq!(ConfigSource::from_args(None, false), None);
}

#[test]
fn loads_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let sample = SubmissionConfig::sample();
    fs::write(&path, serde_json::to_string_pretty(&sample).unwrap()).unwrap();

    let loaded = ConfigSource::File(path).load().unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn invalid_file_lists_every_issue() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let mut value = serde_json::to_value(SubmissionConfig::sample()).unwrap();
    value["application"]["number"] = serde_json::json!("12345");
    value["submission"]["sequenceNumber"] = serde_json::json!(0);
    fs::write(&path, value.to_string()).unwrap();

    let message = format!("{:#}", ConfigSource::File(path).load().unwrap_err());
    assert!(message.contains("is invalid"));
    assert!(message.contains("  - /application/number: "));
    assert!(message.contains("  - /submission/sequenceNumber: "));
}

#[test]
fn malformed_json_and_missing_file_carry_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let message = format!("{:#}", ConfigSource::File(path).load().unwrap_err());
    assert!(message.starts_with("parse configuration "));

    let missing = dir.path().join("absent.json");
    let message = format!("{:#}", ConfigSource::File(missing).load().unwrap_err());
    assert!(message.starts_with("read configuration "));
}

#[test]
fn issues_render_one_per_line() {
    let issues = vec![
        ValidationIssue::new("/documents/0/title", "must not be empty"),
        ValidationIssue::new("", "must be an object"),
    ];
    assert_eq!(
        format_issues(&issues),
        "  - /documents/0/title: must not be empty\n  - <root>: must be an object"
    );
}

#[test]
fn tree_of_generated_sample() {
    let out = TempDir::new().unwrap();
    let output = generate_submission(
        &SubmissionConfig::sample(),
        out.path(),
        &PackageOptions::default(),
    )
    .unwrap();

    let tree = render_tree(&output.paths.sequence_dir, "").unwrap();
    let expected = "\
├── m1/
│   ├── 356h_123456_1.pdf
│   └── cover-123456_1.pdf
├── m2/
├── m3/
│   └── product_information.pdf
├── m4/
├── m5/
│   └── bioavailability_study_report.pdf
├── sha256.txt
└── submissionunit.xml
";
    assert_eq!(tree, expected);
}
