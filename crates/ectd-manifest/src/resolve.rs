//! Reference resolution pass.
//!
//! Runs before anything is written: every keyword reference and keyword type
//! is checked here, so the build itself cannot fail on configuration content.

use std::fmt;

use ectd_model::{ContextStatus, Operation, SubmissionConfig};
use ectd_standards::{
    CodeRef, CtdSection, DEFAULT_SECTION, FormType, form_type_code, keyword_type_code,
    section_for_document_type,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ManifestError, Result};

/// A `{code, codeSystem}` pair attached to a context of use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordReference {
    pub code: String,
    pub code_system: String,
}

impl From<CodeRef> for KeywordReference {
    fn from(code: CodeRef) -> Self {
        Self {
            code: code.code.to_string(),
            code_system: code.code_system.to_string(),
        }
    }
}

/// Application-level definition of a sender-defined keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDefinition {
    pub type_code: CodeRef,
    pub code: String,
    pub code_system: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub index: usize,
    pub section: CtdSection,
    /// The document type had no table entry and the default section was used.
    pub section_defaulted: bool,
    pub status: ContextStatus,
    /// Context of use being replaced, for `replace` operations.
    pub replaces: Option<String>,
    pub references: Vec<KeywordReference>,
}

/// Non-fatal findings surfaced alongside a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    UnresolvedSection {
        document_index: usize,
        doc_type: String,
        fallback: String,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::UnresolvedSection {
                document_index,
                doc_type,
                fallback,
            } => write!(
                f,
                "document {document_index}: no CTD section for type '{doc_type}', filed under {fallback}"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubmission {
    /// One entry per configured document, in configuration order.
    pub documents: Vec<ResolvedDocument>,
    pub keyword_definitions: Vec<KeywordDefinition>,
    pub warnings: Vec<BuildWarning>,
}

/// Resolve sections, statuses and keyword references for every document.
///
/// Fails on the first undeclared keyword reference or unknown keyword type.
pub fn resolve_submission(config: &SubmissionConfig) -> Result<ResolvedSubmission> {
    let keyword_definitions = config
        .keywords
        .iter()
        .map(|keyword| {
            let type_code = keyword_type_code(&keyword.keyword_type).map_err(|_| {
                ManifestError::UnknownKeywordType {
                    code: keyword.code.clone(),
                    keyword_type: keyword.keyword_type.clone(),
                }
            })?;
            Ok(KeywordDefinition {
                type_code,
                code: keyword.code.clone(),
                code_system: keyword.code_system.clone(),
                display_name: keyword.display_name.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut documents = Vec::with_capacity(config.documents.len());
    let mut warnings = Vec::new();

    for (index, document) in config.documents.iter().enumerate() {
        let (section, section_defaulted) = match section_for_document_type(&document.doc_type) {
            Some(section) => (*section, false),
            None => {
                warn!(
                    document_index = index,
                    doc_type = %document.doc_type,
                    fallback = DEFAULT_SECTION.key,
                    "no CTD section for document type, using default"
                );
                warnings.push(BuildWarning::UnresolvedSection {
                    document_index: index,
                    doc_type: document.doc_type.clone(),
                    fallback: DEFAULT_SECTION.key.to_string(),
                });
                (DEFAULT_SECTION, true)
            }
        };

        let mut references = Vec::with_capacity(document.keyword_refs.len() + 1);
        for code in &document.keyword_refs {
            let keyword =
                config
                    .keyword(code)
                    .ok_or_else(|| ManifestError::UnresolvedKeywordReference {
                        document_index: index,
                        code: code.clone(),
                    })?;
            references.push(KeywordReference {
                code: keyword.code.clone(),
                code_system: keyword.code_system.clone(),
            });
        }
        if let Some(form) = FormType::from_document_type(&document.doc_type)
            && form.is_referenced_implicitly()
        {
            references.push(form_type_code(form).into());
        }

        let replaces = match document.operation {
            Operation::Replace => document.replaces_id.clone(),
            Operation::New | Operation::Append | Operation::Delete => None,
        };

        documents.push(ResolvedDocument {
            index,
            section,
            section_defaulted,
            status: document.operation.effective_status(),
            replaces,
            references,
        });
    }

    debug!(
        document_count = documents.len(),
        keyword_count = keyword_definitions.len(),
        warning_count = warnings.len(),
        "resolved submission references"
    );

    Ok(ResolvedSubmission {
        documents,
        keyword_definitions,
        warnings,
    })
}
