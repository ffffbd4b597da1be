//! Code lookups for every coded value the manifest carries.
//!
//! All lookups are total except keyword types: an unrecognized keyword type
//! has no safe default and is reported as [`StandardsError::UnknownKeywordType`].

use std::fmt;

use ectd_model::{ApplicationType, ContactRole, KeywordType, SubmissionType, SubmissionUnitType};

use crate::code_systems::{
    ICH_KEYWORD_TYPES, US_APPLICATION_TYPES, US_FORM_TYPES, US_KEYWORD_DEFINITION_TYPES,
    US_SUBMISSION_CONTACT_TYPES, US_SUBMISSION_TYPES, US_SUBMISSION_UNIT_TYPES,
};
use crate::error::{Result, StandardsError};

/// A code value qualified by the OID of its code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRef {
    pub code: &'static str,
    pub code_system: &'static str,
}

impl CodeRef {
    pub const fn new(code: &'static str, code_system: &'static str) -> Self {
        Self { code, code_system }
    }
}

impl fmt::Display for CodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.code_system)
    }
}

pub fn application_type_code(application_type: ApplicationType) -> CodeRef {
    let code = match application_type {
        ApplicationType::Nda => "us_application_type_1",
        ApplicationType::Anda => "us_application_type_2",
        ApplicationType::Bla => "us_application_type_3",
        ApplicationType::Ind => "us_application_type_4",
        ApplicationType::Dmf => "us_application_type_5",
    };
    CodeRef::new(code, US_APPLICATION_TYPES)
}

pub fn submission_type_code(submission_type: SubmissionType) -> CodeRef {
    let code = match submission_type {
        SubmissionType::Original => "us_submission_type_1",
        SubmissionType::Amendment => "us_submission_type_2",
        SubmissionType::Supplement => "us_submission_type_3",
        SubmissionType::AnnualReport => "us_submission_type_4",
    };
    CodeRef::new(code, US_SUBMISSION_TYPES)
}

pub fn submission_unit_type_code(unit_type: SubmissionUnitType) -> CodeRef {
    let code = match unit_type {
        SubmissionUnitType::Initial => "us_submission_unit_type_3",
        SubmissionUnitType::Amendment => "us_submission_unit_type_4",
    };
    CodeRef::new(code, US_SUBMISSION_UNIT_TYPES)
}

pub fn contact_type_code(role: ContactRole) -> CodeRef {
    let code = match role {
        ContactRole::Regulatory => "us_submission_contact_type_1",
        ContactRole::Technical => "us_submission_contact_type_2",
    };
    CodeRef::new(code, US_SUBMISSION_CONTACT_TYPES)
}

/// FDA administrative forms filed as documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// Form FDA 356h, application to market a new drug or biologic.
    Form356h,
    /// Form FDA 2253, transmittal of promotional material.
    Form2253,
}

impl FormType {
    pub fn from_document_type(doc_type: &str) -> Option<Self> {
        match doc_type {
            "356h" => Some(FormType::Form356h),
            "2253" => Some(FormType::Form2253),
            _ => None,
        }
    }

    /// Forms whose context of use carries an implicit form-type keyword
    /// reference.
    pub fn is_referenced_implicitly(&self) -> bool {
        matches!(self, FormType::Form356h)
    }
}

pub fn form_type_code(form: FormType) -> CodeRef {
    let code = match form {
        FormType::Form356h => "us_form_type_2",
        FormType::Form2253 => "us_form_type_1",
    };
    CodeRef::new(code, US_FORM_TYPES)
}

/// Keyword type code for a known keyword type.
///
/// Study, product and manufacturer keywords use the ICH keyword family;
/// promotional-material keywords use the US keyword definition family.
pub fn keyword_type_code_for(keyword_type: KeywordType) -> CodeRef {
    match keyword_type {
        KeywordType::Manufacturer => CodeRef::new("ich_keyword_type_3", ICH_KEYWORD_TYPES),
        KeywordType::ProductName => CodeRef::new("ich_keyword_type_4", ICH_KEYWORD_TYPES),
        KeywordType::StudyId => CodeRef::new("ich_keyword_type_8", ICH_KEYWORD_TYPES),
        KeywordType::MaterialId => {
            CodeRef::new("us_keyword_definition_type_1", US_KEYWORD_DEFINITION_TYPES)
        }
        KeywordType::IssueDate => {
            CodeRef::new("us_keyword_definition_type_2", US_KEYWORD_DEFINITION_TYPES)
        }
    }
}

/// Keyword type code for a raw keyword type string from a configuration.
pub fn keyword_type_code(keyword_type: &str) -> Result<CodeRef> {
    keyword_type
        .parse::<KeywordType>()
        .map(keyword_type_code_for)
        .map_err(|_| StandardsError::UnknownKeywordType {
            keyword_type: keyword_type.to_string(),
        })
}

/// Reverse lookup from a keyword type code to the keyword type.
pub fn keyword_type_for_code(code: &str) -> Option<KeywordType> {
    KeywordType::ALL
        .into_iter()
        .find(|keyword_type| keyword_type_code_for(*keyword_type).code == code)
}
