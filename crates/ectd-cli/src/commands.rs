use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use ectd_model::SubmissionConfig;
use ectd_package::{
    PackageError, PackageOptions, StagingArea, check_submission, generate_submission,
    verify_digest_manifest,
};
use ectd_standards::sections::{ICH_SECTIONS, US_SECTIONS};
use ectd_standards::{DEFAULT_SECTION, DOCUMENT_TYPE_SECTIONS, section_by_key};
use ectd_validate::parse_config_str;
use tracing::{info, info_span};

use ectd_cli::input::{ConfigSource, read_config_text};
use ectd_cli::tree::render_tree;

use crate::cli::{ConfigArgs, GenerateArgs, SectionsArgs, ValidateArgs, VerifyArgs};
use crate::summary::apply_table_style;
use crate::types::{GenerateResult, ValidateReport, VerifyResult};

fn config_source(args: &ConfigArgs) -> Result<ConfigSource> {
    ConfigSource::from_args(args.input.as_deref(), args.sample)
        .ok_or_else(|| anyhow!("either --input <PATH> or --sample is required"))
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = config_source(&args.config)?.load()?;
    let options = PackageOptions::default().with_placeholders(!args.no_placeholders);

    if args.dry_run {
        let staging = StagingArea::in_temp_dir().context("create staging area")?;
        let span = info_span!("dry_run", staging = %staging.path().display());
        let _guard = span.enter();
        let output = generate_submission(&config, staging.path(), &options)?;
        let tree = render_tree(&output.paths.sequence_dir, "  ")
            .context("render generated tree")?;
        info!("dry run complete, discarding staging area");
        return Ok(GenerateResult {
            output,
            tree: Some(tree),
            dry_run: true,
        });
    }

    let output = generate_submission(&config, &args.output_dir, &options)?;
    let tree = if args.tree {
        Some(render_tree(&output.paths.sequence_dir, "  ").context("render generated tree")?)
    } else {
        None
    };
    Ok(GenerateResult {
        output,
        tree,
        dry_run: false,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateReport> {
    let text = match config_source(&args.config)? {
        ConfigSource::File(path) => read_config_text(&path)?,
        ConfigSource::Sample => serde_json::to_string(&SubmissionConfig::sample())
            .context("serialize sample configuration")?,
    };

    let mut report = ValidateReport::default();
    let config = match parse_config_str(&text) {
        Ok(config) => config,
        Err(error) => {
            report.issues = error.into_issues();
            return Ok(report);
        }
    };
    report.document_count = config.documents.len();

    match check_submission(&config) {
        Ok(resolved) => report.warnings = resolved.warnings,
        Err(PackageError::ConfigurationInvalid { issues }) => report.issues = issues,
        Err(error) => {
            report.suggestion = error.suggestion();
            report.resolution_error = Some(error.to_string());
        }
    }
    Ok(report)
}

pub fn run_verify(args: &VerifyArgs) -> Result<VerifyResult> {
    let verification = verify_digest_manifest(&args.dir)
        .with_context(|| format!("verify {}", args.dir.display()))?;
    Ok(VerifyResult {
        dir: args.dir.clone(),
        verification,
    })
}

pub fn run_sample_config() -> Result<()> {
    let json = serde_json::to_string_pretty(&SubmissionConfig::sample())
        .context("serialize sample configuration")?;
    println!("{json}");
    Ok(())
}

pub fn run_sections(args: &SectionsArgs) -> Result<()> {
    let mut table = Table::new();
    apply_table_style(&mut table);

    if args.all {
        table.set_header(vec!["Key", "Code", "Code System", "Name"]);
        for section in US_SECTIONS.iter().chain(ICH_SECTIONS) {
            table.add_row(vec![
                section.key,
                section.code,
                section.code_system,
                section.name,
            ]);
        }
    } else {
        table.set_header(vec!["Document Type", "Section", "Code", "Name"]);
        for (doc_type, key) in DOCUMENT_TYPE_SECTIONS {
            let section = section_by_key(key)
                .with_context(|| format!("section {key} for document type {doc_type}"))?;
            table.add_row(vec![*doc_type, section.key, section.code, section.name]);
        }
        table.add_row(vec![
            "(other)",
            DEFAULT_SECTION.key,
            DEFAULT_SECTION.code,
            DEFAULT_SECTION.name,
        ]);
    }

    println!("{table}");
    Ok(())
}
