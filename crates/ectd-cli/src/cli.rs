//! CLI argument definitions for the submission generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ectd-generate",
    version,
    about = "eCTD 4.0 Submission Generator - Generate eCTD 4.0 submission packages",
    long_about = "Generate eCTD 4.0 submission packages from a JSON configuration.\n\n\
                  Writes the module directory tree, content files, submissionunit.xml\n\
                  and a sha256.txt digest manifest for one submission sequence."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a submission package.
    Generate(GenerateArgs),

    /// Validate a configuration file without writing anything.
    Validate(ValidateArgs),

    /// Re-hash a generated sequence directory against its sha256.txt.
    Verify(VerifyArgs),

    /// Print the built-in sample configuration as JSON.
    SampleConfig,

    /// List the document type to CTD section mapping.
    Sections(SectionsArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to the JSON configuration file.
    #[arg(short = 'i', long = "input", value_name = "PATH", required_unless_present = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in sample configuration.
    #[arg(long = "sample", conflicts_with = "input")]
    pub sample: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory for the application tree.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = "./output")]
    pub output_dir: PathBuf,

    /// Skip placeholder content for documents without a filePath.
    #[arg(long = "no-placeholders")]
    pub no_placeholders: bool,

    /// Build in a temporary staging area, report, then discard the output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the generated sequence directory tree.
    #[arg(long = "tree")]
    pub tree: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Sequence directory containing sha256.txt.
    #[arg(value_name = "SEQUENCE_DIR")]
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct SectionsArgs {
    /// List every known section, not only the document type mapping.
    #[arg(long = "all")]
    pub all: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
