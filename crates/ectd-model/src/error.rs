use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid application type: {0}")]
    InvalidApplicationType(String),
    #[error("invalid submission type: {0}")]
    InvalidSubmissionType(String),
    #[error("invalid CTD module: {0}")]
    InvalidModule(String),
    #[error("invalid lifecycle operation: {0}")]
    InvalidOperation(String),
    #[error("unknown keyword type: {0}")]
    UnknownKeywordType(String),
    #[error("invalid identifier {value}: {message}")]
    InvalidIdentifier { value: String, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
