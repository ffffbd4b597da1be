#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::ModelError;
use crate::config::SubmissionConfig;

/// Opaque identifier of an addressable manifest entity.
///
/// Rendered as a hyphenated lowercase-hex UUID.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for EntityId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|error| ModelError::InvalidIdentifier {
                value: s.to_string(),
                message: error.to_string(),
            })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Identifiers for one document: its body and its context of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentIds {
    pub document: EntityId,
    pub context_of_use: EntityId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactIds {
    pub regulatory: Option<EntityId>,
    pub technical: Option<EntityId>,
}

/// Every identifier needed to build one manifest, assigned up front so all
/// cross-references resolve by lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionIds {
    pub submission_unit: EntityId,
    pub submission: EntityId,
    /// Indexed by the document's position in the configuration.
    pub documents: Vec<DocumentIds>,
    pub contacts: ContactIds,
}

impl SubmissionIds {
    /// Assign fresh random identifiers for every entity in `config`.
    pub fn assign(config: &SubmissionConfig) -> Self {
        let documents = config
            .documents
            .iter()
            .map(|_| DocumentIds {
                document: EntityId::random(),
                context_of_use: EntityId::random(),
            })
            .collect();
        let contacts = match &config.contacts {
            Some(contacts) => ContactIds {
                regulatory: contacts.regulatory.as_ref().map(|_| EntityId::random()),
                technical: contacts.technical.as_ref().map(|_| EntityId::random()),
            },
            None => ContactIds::default(),
        };
        Self {
            submission_unit: EntityId::random(),
            submission: EntityId::random(),
            documents,
            contacts,
        }
    }

    pub fn document(&self, index: usize) -> Option<&DocumentIds> {
        self.documents.get(index)
    }

    /// All identifiers in a stable order, for uniqueness checks.
    pub fn all(&self) -> Vec<EntityId> {
        let mut out = vec![self.submission_unit, self.submission];
        for ids in &self.documents {
            out.push(ids.document);
            out.push(ids.context_of_use);
        }
        out.extend(self.contacts.regulatory);
        out.extend(self.contacts.technical);
        out
    }
}
