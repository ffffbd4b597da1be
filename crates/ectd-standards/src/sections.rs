//! CTD section codes and the document-type to section table.
//!
//! Module 1 is regional (US); modules 2 to 5 are ICH harmonized.

use crate::code_systems::{ICH_CTD_SECTIONS, US_CTD_SECTIONS};
use crate::registry::CodeRef;

/// A location in the CTD table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CtdSection {
    /// Table key, e.g. `m3.2.p`.
    pub key: &'static str,
    pub code: &'static str,
    pub code_system: &'static str,
    pub name: &'static str,
}

impl CtdSection {
    const fn us(key: &'static str, code: &'static str, name: &'static str) -> Self {
        Self {
            key,
            code,
            code_system: US_CTD_SECTIONS,
            name,
        }
    }

    const fn ich(key: &'static str, code: &'static str, name: &'static str) -> Self {
        Self {
            key,
            code,
            code_system: ICH_CTD_SECTIONS,
            name,
        }
    }

    pub fn code_ref(&self) -> CodeRef {
        CodeRef::new(self.code, self.code_system)
    }
}

pub const US_SECTIONS: &[CtdSection] = &[
    CtdSection::us("m1.1", "us_1.1", "Forms"),
    CtdSection::us("m1.2", "us_1.2", "Cover Letter"),
    CtdSection::us("m1.3", "us_1.3", "Administrative Information"),
    CtdSection::us("m1.4", "us_1.4", "References"),
    CtdSection::us("m1.14", "us_1.14", "Labeling"),
    CtdSection::us("m1.15", "us_1.15", "Patent Information"),
];

pub const ICH_SECTIONS: &[CtdSection] = &[
    // Module 2
    CtdSection::ich("m2.2", "ich_2.2", "Introduction"),
    CtdSection::ich("m2.3", "ich_2.3", "Quality Overall Summary"),
    CtdSection::ich("m2.4", "ich_2.4", "Nonclinical Overview"),
    CtdSection::ich("m2.5", "ich_2.5", "Clinical Overview"),
    CtdSection::ich(
        "m2.6",
        "ich_2.6",
        "Nonclinical Written and Tabulated Summaries",
    ),
    CtdSection::ich("m2.7", "ich_2.7", "Clinical Summary"),
    // Module 3
    CtdSection::ich("m3.2.s", "ich_3.2.s", "Drug Substance"),
    CtdSection::ich("m3.2.p", "ich_3.2.p", "Drug Product"),
    CtdSection::ich(
        "m3.2.p.2.2",
        "ich_3.2.p.2.2",
        "Drug Product Description and Composition",
    ),
    CtdSection::ich("m3.2.a", "ich_3.2.a", "Appendices"),
    CtdSection::ich("m3.2.r", "ich_3.2.r", "Regional Information"),
    CtdSection::ich("m3.3", "ich_3.3", "Literature References"),
    // Module 4
    CtdSection::ich("m4.2.1", "ich_4.2.1", "Pharmacology"),
    CtdSection::ich("m4.2.2", "ich_4.2.2", "Pharmacokinetics"),
    CtdSection::ich("m4.2.3", "ich_4.2.3", "Toxicology"),
    // Module 5
    CtdSection::ich(
        "m5.2",
        "ich_5.2",
        "Tabular Listing of All Clinical Studies",
    ),
    CtdSection::ich("m5.3.1.1", "ich_5.3.1.1", "BA/BE Studies"),
    CtdSection::ich("m5.3.1.2", "ich_5.3.1.2", "Comparative BA/BE Studies"),
    CtdSection::ich("m5.3.3.1", "ich_5.3.3.1", "Controlled Clinical Studies"),
    CtdSection::ich("m5.3.5.1", "ich_5.3.5.1", "Efficacy and Safety Studies"),
    CtdSection::ich("m5.3.5.3", "ich_5.3.5.3", "Reports of Analyses of Data"),
];

/// Recognized document types and the section key each is filed under.
pub const DOCUMENT_TYPE_SECTIONS: &[(&str, &str)] = &[
    ("356h", "m1.1"),
    ("cover", "m1.2"),
    ("2253", "m1.3"),
    ("labeling", "m1.14"),
    ("product_info", "m3.2.p.2.2"),
    ("drug_substance", "m3.2.s"),
    ("drug_product", "m3.2.p"),
    ("bioavailability", "m5.3.1.1"),
    ("bioequivalence", "m5.3.1.2"),
    ("clinical_study", "m5.3.5.1"),
    ("study_data", "m5.3.1.1"),
];

/// Section used for document types missing from [`DOCUMENT_TYPE_SECTIONS`].
pub const DEFAULT_SECTION: CtdSection = CtdSection::us("m1.2", "us_1.2", "Cover Letter");

/// Look up a section by table key; US sections take precedence.
pub fn section_by_key(key: &str) -> Option<&'static CtdSection> {
    US_SECTIONS
        .iter()
        .chain(ICH_SECTIONS.iter())
        .find(|section| section.key == key)
}

/// Section for a document type, or `None` when the type is not in the table.
pub fn section_for_document_type(doc_type: &str) -> Option<&'static CtdSection> {
    DOCUMENT_TYPE_SECTIONS
        .iter()
        .find(|(known, _)| *known == doc_type)
        .and_then(|(_, key)| section_by_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        for (doc_type, key) in DOCUMENT_TYPE_SECTIONS {
            let section = section_for_document_type(doc_type)
                .unwrap_or_else(|| panic!("{doc_type} -> {key} does not resolve"));
            assert_eq!(section.key, *key);
        }
    }

    #[test]
    fn module_one_sections_are_regional() {
        let forms = section_for_document_type("356h").unwrap();
        assert_eq!(forms.code, "us_1.1");
        assert_eq!(forms.code_system, US_CTD_SECTIONS);

        let product = section_for_document_type("product_info").unwrap();
        assert_eq!(product.code, "ich_3.2.p.2.2");
        assert_eq!(product.code_system, ICH_CTD_SECTIONS);
    }

    #[test]
    fn unknown_type_has_no_section() {
        assert!(section_for_document_type("meeting_minutes").is_none());
        assert_eq!(DEFAULT_SECTION.code, "us_1.2");
    }
}
