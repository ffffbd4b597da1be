//! Built-in sample configuration.

use crate::config::{
    Application, Contact, Contacts, DocumentConfig, KeywordConfig, Submission, SubmissionConfig,
};
use crate::enums::{ApplicationType, CtdModule, KeywordType, SubmissionType};

impl SubmissionConfig {
    /// An original NDA with both contacts, four documents and three keywords.
    pub fn sample() -> Self {
        let sponsor = "Sample Pharmaceuticals Inc";
        Self {
            application: Application {
                application_type: ApplicationType::Nda,
                number: "123456".to_string(),
                sponsor: sponsor.to_string(),
            },
            submission: Submission {
                submission_type: SubmissionType::Original,
                sequence_number: 1,
                title: "Original Application".to_string(),
            },
            contacts: Some(Contacts {
                regulatory: Some(Contact {
                    first_name: "Jane".to_string(),
                    last_name: "Smith".to_string(),
                    email: "jane.smith@sample.com".to_string(),
                    phone: Some("+1(555)123-4567".to_string()),
                    organization: Some(sponsor.to_string()),
                    ..Contact::default()
                }),
                technical: Some(Contact {
                    first_name: "John".to_string(),
                    last_name: "Doe".to_string(),
                    email: "john.doe@sample.com".to_string(),
                    phone: Some("+1(555)987-6543".to_string()),
                    organization: Some(sponsor.to_string()),
                    ..Contact::default()
                }),
            }),
            documents: vec![
                DocumentConfig::new(CtdModule::M1, "356h", "Form FDA 356h"),
                DocumentConfig::new(CtdModule::M1, "cover", "Cover Letter"),
                DocumentConfig::new(CtdModule::M3, "product_info", "Product Information")
                    .with_keyword_refs(["MANU_001", "PROD_NAME_001"]),
                DocumentConfig::new(
                    CtdModule::M5,
                    "bioavailability",
                    "Bioavailability Study Report",
                )
                .with_keyword_refs(["STUDY_001"]),
            ],
            keywords: vec![
                KeywordConfig::new(
                    KeywordType::StudyId,
                    "STUDY_001",
                    "2.16.840.1.113883.9999.1",
                    "Pivotal BA Study",
                ),
                KeywordConfig::new(
                    KeywordType::Manufacturer,
                    "MANU_001",
                    "2.16.840.1.113883.9999.2",
                    "Sample Pharmaceuticals Manufacturing Site",
                ),
                KeywordConfig::new(
                    KeywordType::ProductName,
                    "PROD_NAME_001",
                    "2.16.840.1.113883.9999.1",
                    "Sample Drug Product XYZ",
                ),
            ],
        }
    }
}
