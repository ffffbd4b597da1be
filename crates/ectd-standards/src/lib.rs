#![deny(unsafe_code)]

//! eCTD 4.0 code-system registry.
//!
//! Static tables mapping submission concepts to `{code, codeSystem}` pairs.
//! Nothing here holds state; every function is a pure lookup.

pub mod code_systems;
pub mod error;
pub mod registry;
pub mod sections;

pub use crate::error::{Result, StandardsError};
pub use crate::registry::{
    CodeRef, FormType, application_type_code, contact_type_code, form_type_code,
    keyword_type_code, keyword_type_code_for, keyword_type_for_code, submission_type_code,
    submission_unit_type_code,
};
pub use crate::sections::{
    CtdSection, DEFAULT_SECTION, DOCUMENT_TYPE_SECTIONS, section_by_key,
    section_for_document_type,
};
