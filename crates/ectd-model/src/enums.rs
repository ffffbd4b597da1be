//! Type-safe enumerations for submission configuration values.
//!
//! The wire values (as they appear in the JSON configuration) are kept in
//! `as_str` so the serde renames, `FromStr` and `Display` stay in agreement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// US regulatory application type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplicationType {
    #[serde(rename = "NDA")]
    Nda,
    #[serde(rename = "ANDA")]
    Anda,
    #[serde(rename = "BLA")]
    Bla,
    #[serde(rename = "IND")]
    Ind,
    #[serde(rename = "DMF")]
    Dmf,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 5] = [
        ApplicationType::Nda,
        ApplicationType::Anda,
        ApplicationType::Bla,
        ApplicationType::Ind,
        ApplicationType::Dmf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Nda => "NDA",
            ApplicationType::Anda => "ANDA",
            ApplicationType::Bla => "BLA",
            ApplicationType::Ind => "IND",
            ApplicationType::Dmf => "DMF",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationType::ALL
            .into_iter()
            .find(|value| value.as_str() == s.trim())
            .ok_or_else(|| ModelError::InvalidApplicationType(s.to_string()))
    }
}

/// Submission type within an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    Original,
    Amendment,
    Supplement,
    AnnualReport,
}

impl SubmissionType {
    pub const ALL: [SubmissionType; 4] = [
        SubmissionType::Original,
        SubmissionType::Amendment,
        SubmissionType::Supplement,
        SubmissionType::AnnualReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Original => "original",
            SubmissionType::Amendment => "amendment",
            SubmissionType::Supplement => "supplement",
            SubmissionType::AnnualReport => "annual_report",
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubmissionType::ALL
            .into_iter()
            .find(|value| value.as_str() == s.trim())
            .ok_or_else(|| ModelError::InvalidSubmissionType(s.to_string()))
    }
}

/// Submission-unit type, derived from the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionUnitType {
    Initial,
    Amendment,
}

impl SubmissionUnitType {
    /// The first sequence of an application is the initial unit; every later
    /// sequence amends it.
    pub fn for_sequence(sequence_number: u32) -> Self {
        if sequence_number == 1 {
            SubmissionUnitType::Initial
        } else {
            SubmissionUnitType::Amendment
        }
    }
}

/// CTD module directory a document is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtdModule {
    M1,
    M2,
    M3,
    M4,
    M5,
}

impl CtdModule {
    pub const ALL: [CtdModule; 5] = [
        CtdModule::M1,
        CtdModule::M2,
        CtdModule::M3,
        CtdModule::M4,
        CtdModule::M5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CtdModule::M1 => "m1",
            CtdModule::M2 => "m2",
            CtdModule::M3 => "m3",
            CtdModule::M4 => "m4",
            CtdModule::M5 => "m5",
        }
    }
}

impl fmt::Display for CtdModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtdModule {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        CtdModule::ALL
            .into_iter()
            .find(|value| value.as_str() == normalized)
            .ok_or_else(|| ModelError::InvalidModule(s.to_string()))
    }
}

/// Lifecycle operation applied to a document in this sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    New,
    Replace,
    Append,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::New,
        Operation::Replace,
        Operation::Append,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::New => "new",
            Operation::Replace => "replace",
            Operation::Append => "append",
            Operation::Delete => "delete",
        }
    }

    /// Deleting a document suspends its context of use; every other
    /// operation leaves it active.
    pub fn effective_status(&self) -> ContextStatus {
        match self {
            Operation::Delete => ContextStatus::Suspended,
            Operation::New | Operation::Replace | Operation::Append => ContextStatus::Active,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Operation::New)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|value| value.as_str() == s.trim())
            .ok_or_else(|| ModelError::InvalidOperation(s.to_string()))
    }
}

/// Status code carried by a context of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextStatus {
    Active,
    Suspended,
}

impl ContextStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextStatus::Active => "active",
            ContextStatus::Suspended => "suspended",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ContextStatus::Active)
    }
}

impl fmt::Display for ContextStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sender-defined keyword classification.
///
/// The first three belong to the ICH keyword family; `MaterialId` and
/// `IssueDate` are the US promotional-material subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordType {
    StudyId,
    ProductName,
    Manufacturer,
    MaterialId,
    IssueDate,
}

impl KeywordType {
    pub const ALL: [KeywordType; 5] = [
        KeywordType::StudyId,
        KeywordType::ProductName,
        KeywordType::Manufacturer,
        KeywordType::MaterialId,
        KeywordType::IssueDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordType::StudyId => "studyId",
            KeywordType::ProductName => "productName",
            KeywordType::Manufacturer => "manufacturer",
            KeywordType::MaterialId => "materialId",
            KeywordType::IssueDate => "issueDate",
        }
    }

    pub fn is_promotional(&self) -> bool {
        matches!(self, KeywordType::MaterialId | KeywordType::IssueDate)
    }
}

impl fmt::Display for KeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeywordType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeywordType::ALL
            .into_iter()
            .find(|value| value.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownKeywordType(s.to_string()))
    }
}

/// Role of a submission contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRole {
    Regulatory,
    Technical,
}

impl ContactRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Regulatory => "regulatory",
            ContactRole::Technical => "technical",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_follows_sequence() {
        assert_eq!(
            SubmissionUnitType::for_sequence(1),
            SubmissionUnitType::Initial
        );
        assert_eq!(
            SubmissionUnitType::for_sequence(2),
            SubmissionUnitType::Amendment
        );
        assert_eq!(
            SubmissionUnitType::for_sequence(42),
            SubmissionUnitType::Amendment
        );
    }

    #[test]
    fn delete_is_the_only_suspending_operation() {
        for operation in Operation::ALL {
            let expected = operation == Operation::Delete;
            assert_eq!(!operation.effective_status().is_active(), expected);
        }
    }

    #[test]
    fn parse_rejects_unknown_keyword_type() {
        assert_eq!(
            "manufacturer".parse::<KeywordType>(),
            Ok(KeywordType::Manufacturer)
        );
        assert_eq!(
            "batchNumber".parse::<KeywordType>(),
            Err(ModelError::UnknownKeywordType("batchNumber".to_string()))
        );
    }

    #[test]
    fn module_parse_is_case_insensitive() {
        assert_eq!("M3".parse::<CtdModule>(), Ok(CtdModule::M3));
        assert!("m6".parse::<CtdModule>().is_err());
    }
}
