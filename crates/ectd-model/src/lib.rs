//! Data model for eCTD 4.0 submission generation.
//!
//! - [`SubmissionConfig`]: the declarative input for one sequence
//! - [`SubmissionIds`]: identifiers assigned to every manifest entity of a run
//! - Enumerations for application, submission, module, lifecycle and keyword
//!   values

pub mod config;
pub mod enums;
pub mod error;
pub mod ids;
mod sample;

pub use config::{
    Application, Contact, Contacts, DocumentConfig, KeywordConfig, Submission, SubmissionConfig,
};
pub use enums::{
    ApplicationType, ContactRole, ContextStatus, CtdModule, KeywordType, Operation,
    SubmissionType, SubmissionUnitType,
};
pub use error::{ModelError, Result};
pub use ids::{ContactIds, DocumentIds, EntityId, SubmissionIds};
