#![deny(unsafe_code)]

//! Configuration validation for eCTD submission packages.
//!
//! Input is validated structurally as raw JSON first, collecting every
//! violation, and only then deserialized into the typed model.

pub mod error;
pub mod issue;
pub mod schema;

use ectd_model::SubmissionConfig;
use serde_json::Value;
use tracing::debug;

pub use crate::error::{Result, ValidateError};
pub use crate::issue::ValidationIssue;
pub use crate::schema::validate_value;

/// Parse and validate a configuration from JSON text.
pub fn parse_config_str(input: &str) -> Result<SubmissionConfig> {
    let value: Value = serde_json::from_str(input)?;
    parse_config_value(value)
}

/// Validate a JSON value and convert it into a typed configuration.
pub fn parse_config_value(value: Value) -> Result<SubmissionConfig> {
    let issues = validate_value(&value);
    if !issues.is_empty() {
        debug!(issue_count = issues.len(), "configuration rejected");
        return Err(ValidateError::Invalid { issues });
    }
    Ok(serde_json::from_value(value)?)
}

/// Re-validate an already typed configuration.
///
/// Typed values satisfy the enum rules by construction; the pattern and
/// cross-field rules still apply.
pub fn validate_config(config: &SubmissionConfig) -> Vec<ValidationIssue> {
    match serde_json::to_value(config) {
        Ok(value) => validate_value(&value),
        Err(error) => vec![ValidationIssue::new("", error.to_string())],
    }
}
