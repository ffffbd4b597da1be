#![deny(unsafe_code)]

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StandardsError {
    #[error("unknown keyword type: {keyword_type}")]
    UnknownKeywordType { keyword_type: String },
}

pub type Result<T> = std::result::Result<T, StandardsError>;
