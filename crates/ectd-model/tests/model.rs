//! Tests for ectd-model types.

use std::collections::HashSet;

use ectd_model::{
    ApplicationType, ContactRole, CtdModule, EntityId, KeywordType, Operation, SubmissionConfig,
    SubmissionIds, SubmissionType,
};

const MINIMAL: &str = r#"{
    "application": { "type": "BLA", "number": "654321", "sponsor": "Acme Bio" },
    "submission": { "type": "annual_report", "sequenceNumber": 3, "title": "Annual Report" },
    "documents": [
        { "module": "m1", "type": "cover", "title": "Cover Letter" },
        {
            "module": "m3",
            "type": "drug_product",
            "title": "Drug Product",
            "operation": "replace",
            "replacesId": "0b6c4c8e-2f7a-4a55-9a57-3e1f1c1d2a10",
            "keywordRefs": ["MANU_001"]
        }
    ],
    "keywords": [
        {
            "type": "manufacturer",
            "code": "MANU_001",
            "codeSystem": "2.16.840.1.113883.9999.2",
            "displayName": "Site A"
        }
    ]
}"#;

#[test]
fn deserializes_camel_case_configuration() {
    let config: SubmissionConfig = serde_json::from_str(MINIMAL).expect("parse config");
    assert_eq!(config.application.application_type, ApplicationType::Bla);
    assert_eq!(
        config.submission.submission_type,
        SubmissionType::AnnualReport
    );
    assert_eq!(config.submission.sequence_number, 3);
    assert!(config.contacts.is_none());
    assert_eq!(config.documents.len(), 2);

    let first = &config.documents[0];
    assert_eq!(first.module, CtdModule::M1);
    assert_eq!(first.operation, Operation::New);
    assert!(first.keyword_refs.is_empty());

    let second = &config.documents[1];
    assert_eq!(second.operation, Operation::Replace);
    assert_eq!(
        second.replaces_id.as_deref(),
        Some("0b6c4c8e-2f7a-4a55-9a57-3e1f1c1d2a10")
    );
    assert_eq!(second.keyword_refs, vec!["MANU_001".to_string()]);
    assert_eq!(
        config.keywords[0].parsed_type(),
        Ok(KeywordType::Manufacturer)
    );
}

#[test]
fn application_dir_uses_type_prefix() {
    let config: SubmissionConfig = serde_json::from_str(MINIMAL).expect("parse config");
    assert_eq!(config.application_dir_name(), "BLA654321");
}

#[test]
fn keyword_lookup_by_code() {
    let config = SubmissionConfig::sample();
    let keyword = config.keyword("STUDY_001").expect("keyword present");
    assert_eq!(keyword.display_name, "Pivotal BA Study");
    assert!(config.keyword("MISSING").is_none());
}

#[test]
fn contacts_are_ordered_regulatory_first() {
    let config = SubmissionConfig::sample();
    let roles: Vec<ContactRole> = config
        .present_contacts()
        .into_iter()
        .map(|(role, _)| role)
        .collect();
    assert_eq!(roles, vec![ContactRole::Regulatory, ContactRole::Technical]);
}

#[test]
fn sample_serializes_without_default_fields() {
    let config = SubmissionConfig::sample();
    let json = serde_json::to_value(&config).expect("serialize sample");
    let first = &json["documents"][0];
    assert_eq!(first["type"], "356h");
    assert!(first.get("operation").is_none());
    assert!(first.get("keywordRefs").is_none());
    assert_eq!(json["application"]["type"], "NDA");
    assert_eq!(json["keywords"][0]["codeSystem"], "2.16.840.1.113883.9999.1");
}

#[test]
fn assigned_ids_are_unique() {
    let config = SubmissionConfig::sample();
    let ids = SubmissionIds::assign(&config);
    assert_eq!(ids.documents.len(), config.documents.len());
    assert!(ids.contacts.regulatory.is_some());
    assert!(ids.contacts.technical.is_some());

    let all = ids.all();
    let distinct: HashSet<EntityId> = all.iter().copied().collect();
    assert_eq!(all.len(), distinct.len());
    // 2 header ids + 2 per document + 2 contacts
    assert_eq!(all.len(), 2 + 2 * config.documents.len() + 2);
}

#[test]
fn ids_differ_between_runs() {
    let config = SubmissionConfig::sample();
    let first = SubmissionIds::assign(&config);
    let second = SubmissionIds::assign(&config);
    assert_ne!(first.submission_unit, second.submission_unit);
}

#[test]
fn missing_contacts_get_no_ids() {
    let config: SubmissionConfig = serde_json::from_str(MINIMAL).expect("parse config");
    let ids = SubmissionIds::assign(&config);
    assert!(ids.contacts.regulatory.is_none());
    assert!(ids.contacts.technical.is_none());
}

#[test]
fn entity_id_renders_lowercase_hyphenated() {
    let id: EntityId = "0B6C4C8E-2F7A-4A55-9A57-3E1F1C1D2A10"
        .parse()
        .expect("parse id");
    assert_eq!(id.to_string(), "0b6c4c8e-2f7a-4a55-9a57-3e1f1c1d2a10");
    assert!("not-a-uuid".parse::<EntityId>().is_err());
}
