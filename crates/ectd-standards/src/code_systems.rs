//! Object identifiers of the ICH and USFDA eCTD 4.0 code systems.
//!
//! Values follow ICH eCTD v4.0 IG v1.5 and USFDA eCTD v4.0 IG v1.5.1.

/// An implementation guide identifier announced in the message envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplementationGuide {
    pub root: &'static str,
    pub name: &'static str,
}

pub const ICH_ECTD_V4_IG: ImplementationGuide = ImplementationGuide {
    root: "2.16.840.1.113883.3.989.2.2.1.11.4",
    name: "ICH eCTD v4.0 IG v1.5",
};

pub const USFDA_ECTD_V4_IG: ImplementationGuide = ImplementationGuide {
    root: "2.16.840.1.113883.3.989.5.1.2.2.1.18.6",
    name: "USFDA eCTD v4.0 IG v1.5.1",
};

/// Guides the receiver device declares, in envelope order.
pub const IMPLEMENTATION_GUIDES: [ImplementationGuide; 2] = [ICH_ECTD_V4_IG, USFDA_ECTD_V4_IG];

// ICH
pub const ICH_CTD_SECTIONS: &str = "2.16.840.1.113883.3.989.2.2.1.1.4";
pub const ICH_KEYWORD_TYPES: &str = "2.16.840.1.113883.3.989.2.2.1.5.3";

// USFDA
pub const US_APPLICATION_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.1.3";
pub const US_CTD_SECTIONS: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.2.5";
pub const US_KEYWORD_DEFINITION_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.3.2";
pub const US_FORM_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.5.5";
pub const US_SUBMISSION_CONTACT_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.11.2";
pub const US_SUBMISSION_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.12.4";
pub const US_SUBMISSION_UNIT_TYPES: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.13.1";

/// Identifier namespace for the six-digit application number.
pub const US_APPLICATION_NUMBER: &str = "2.16.840.1.113883.3.989.5.1.2.2.1.16.1";
