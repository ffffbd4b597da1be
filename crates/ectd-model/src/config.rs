//! Submission configuration as read from JSON.
//!
//! Field names follow the camelCase wire format. The model is immutable for
//! the duration of one generation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::enums::{
    ApplicationType, ContactRole, CtdModule, KeywordType, Operation, SubmissionType,
};
use crate::error::Result;

/// Complete declarative description of one submission sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionConfig {
    pub application: Application,
    pub submission: Submission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    #[serde(default)]
    pub documents: Vec<DocumentConfig>,
    #[serde(default)]
    pub keywords: Vec<KeywordConfig>,
}

impl SubmissionConfig {
    /// Directory name for the application, e.g. `NDA123456`.
    pub fn application_dir_name(&self) -> String {
        format!(
            "{}{}",
            self.application.application_type, self.application.number
        )
    }

    /// Look up a keyword by its sender-defined code.
    pub fn keyword(&self, code: &str) -> Option<&KeywordConfig> {
        self.keywords.iter().find(|keyword| keyword.code == code)
    }

    /// Present contacts in manifest order (regulatory before technical).
    pub fn present_contacts(&self) -> Vec<(ContactRole, &Contact)> {
        let Some(contacts) = &self.contacts else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(2);
        if let Some(contact) = &contacts.regulatory {
            out.push((ContactRole::Regulatory, contact));
        }
        if let Some(contact) = &contacts.technical {
            out.push((ContactRole::Technical, contact));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    /// Six-digit application number.
    pub number: String,
    pub sponsor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "type")]
    pub submission_type: SubmissionType,
    pub sequence_number: u32,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// One document placed in the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    pub module: CtdModule,
    /// Free-form document type; a recognized subset maps to a CTD section.
    #[serde(rename = "type")]
    pub doc_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Operation::is_default")]
    pub operation: Operation,
    /// Context-of-use identifier being replaced (`operation = replace`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces_id: Option<String>,
    /// Existing content to package; a placeholder is generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword_refs: Vec<String>,
}

impl DocumentConfig {
    pub fn new(module: CtdModule, doc_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            module,
            doc_type: doc_type.into(),
            title: title.into(),
            operation: Operation::New,
            replaces_id: None,
            file_path: None,
            keyword_refs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    #[must_use]
    pub fn with_replaces_id(mut self, replaces_id: impl Into<String>) -> Self {
        self.replaces_id = Some(replaces_id.into());
        self
    }

    #[must_use]
    pub fn with_keyword_refs<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_refs = refs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }
}

/// Sender-defined keyword declared at the application level.
///
/// The type is kept as the raw wire string: keyword vocabularies grow, and an
/// unrecognized type has to surface as a build failure rather than a parse
/// failure of the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordConfig {
    #[serde(rename = "type")]
    pub keyword_type: String,
    pub code: String,
    pub code_system: String,
    pub display_name: String,
}

impl KeywordConfig {
    pub fn new(
        keyword_type: KeywordType,
        code: impl Into<String>,
        code_system: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            keyword_type: keyword_type.as_str().to_string(),
            code: code.into(),
            code_system: code_system.into(),
            display_name: display_name.into(),
        }
    }

    pub fn parsed_type(&self) -> Result<KeywordType> {
        self.keyword_type.parse()
    }
}
