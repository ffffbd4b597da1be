//! Loading the submission configuration for a command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ectd_model::SubmissionConfig;
use ectd_validate::{ValidateError, ValidationIssue, parse_config_str};
use tracing::info;

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Sample,
}

impl ConfigSource {
    /// `--sample` wins over `--input`; `None` when neither was given.
    pub fn from_args(input: Option<&Path>, sample: bool) -> Option<Self> {
        if sample {
            return Some(ConfigSource::Sample);
        }
        input.map(|path| ConfigSource::File(path.to_path_buf()))
    }

    /// Read, validate and deserialize the configuration.
    pub fn load(&self) -> Result<SubmissionConfig> {
        match self {
            ConfigSource::Sample => {
                info!("using built-in sample configuration");
                Ok(SubmissionConfig::sample())
            }
            ConfigSource::File(path) => {
                let text = read_config_text(path)?;
                match parse_config_str(&text) {
                    Ok(config) => {
                        info!(path = %path.display(), "loaded configuration");
                        Ok(config)
                    }
                    Err(ValidateError::Invalid { issues }) => bail!(
                        "configuration {} is invalid:\n{}",
                        path.display(),
                        format_issues(&issues)
                    ),
                    Err(error) => Err(error)
                        .with_context(|| format!("parse configuration {}", path.display())),
                }
            }
        }
    }
}

pub fn read_config_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read configuration {}", path.display()))
}

/// One `  - <location>: <message>` line per issue.
pub fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
