use crate::issue::ValidationIssue;

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration has {} validation issue(s)", issues.len())]
    Invalid { issues: Vec<ValidationIssue> },
}

impl ValidateError {
    /// Issues carried by the error; a JSON syntax error yields one issue at the root.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        match self {
            ValidateError::Json(error) => vec![ValidationIssue::new("", error.to_string())],
            ValidateError::Invalid { issues } => issues,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
