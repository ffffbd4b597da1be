//! Error types for manifest resolution, building and serialization.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    /// A document references a keyword code the configuration does not declare.
    #[error("document {document_index} references undeclared keyword code '{code}'")]
    UnresolvedKeywordReference { document_index: usize, code: String },

    /// A declared keyword has a type outside the known keyword vocabulary.
    #[error("keyword '{code}' has unknown type '{keyword_type}'")]
    UnknownKeywordType { code: String, keyword_type: String },

    /// Identifiers were assigned for a different configuration.
    #[error("identifier set covers {actual} document(s), configuration has {expected}")]
    IdentifierMismatch { expected: usize, actual: usize },

    /// Resolution was produced for a different configuration.
    #[error("resolution covers {actual} document(s), configuration has {expected}")]
    ResolutionMismatch { expected: usize, actual: usize },

    /// Text or an attribute value holds a character XML 1.0 cannot carry.
    #[error(
        "element <{element}> contains U+{:04X}, which XML 1.0 does not allow",
        u32::from(*character)
    )]
    InvalidXmlCharacter { element: String, character: char },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ManifestError {
    /// Whether the error stems from the configuration rather than the environment.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedKeywordReference { .. }
                | Self::UnknownKeywordType { .. }
                | Self::InvalidXmlCharacter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
