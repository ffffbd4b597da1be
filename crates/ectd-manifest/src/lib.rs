#![deny(unsafe_code)]

//! eCTD 4.0 submission manifest (`submissionunit.xml`).
//!
//! The manifest is built in two steps. [`resolve_submission`] checks every
//! cross-reference in a configuration and yields the resolved view plus
//! non-fatal warnings; [`build_manifest`] combines that view with the
//! identifier set and content file records into an [`XmlElement`] tree,
//! which [`to_xml_string`] or [`write_document`] render.

mod contact;
pub mod builder;
pub mod element;
pub mod envelope;
pub mod error;
pub mod record;
pub mod resolve;
pub mod serialize;

pub use crate::builder::{PRIORITY_STEP, build_manifest, priority_number};
pub use crate::element::{XmlElement, XmlNode};
pub use crate::error::{ManifestError, Result};
pub use crate::record::ContentFileRecord;
pub use crate::resolve::{
    BuildWarning, KeywordDefinition, KeywordReference, ResolvedDocument, ResolvedSubmission,
    resolve_submission,
};
pub use crate::serialize::{SerializeOptions, to_xml_string, write_document};

/// File name of the manifest at the top of the sequence directory.
pub const MANIFEST_FILE_NAME: &str = "submissionunit.xml";
