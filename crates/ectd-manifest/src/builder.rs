//! Submission unit builder.
//!
//! Turns a resolved configuration, its identifier set and the content file
//! records into the element tree of `submissionunit.xml`.

use ectd_model::{
    ContactRole, DocumentConfig, EntityId, SubmissionConfig, SubmissionIds, SubmissionUnitType,
};
use ectd_standards::code_systems::US_APPLICATION_NUMBER;
use ectd_standards::{
    CodeRef, application_type_code, contact_type_code, submission_type_code,
    submission_unit_type_code,
};
use tracing::debug;

use crate::contact::callback_contact;
use crate::element::XmlElement;
use crate::envelope::message_root;
use crate::error::{ManifestError, Result};
use crate::record::ContentFileRecord;
use crate::resolve::{KeywordDefinition, ResolvedDocument, ResolvedSubmission};

/// Spacing between consecutive `priorityNumber` values.
pub const PRIORITY_STEP: u64 = 1000;

pub const INTEGRITY_CHECK_ALGORITHM: &str = "SHA256";

/// Priority of the document at `index`; the first document ranks lowest.
pub fn priority_number(index: usize) -> u64 {
    (index as u64 + 1) * PRIORITY_STEP
}

/// Build the complete manifest tree.
///
/// `records` may cover any subset of documents; an active document without a
/// record gets a context of use but no document body.
pub fn build_manifest(
    config: &SubmissionConfig,
    resolved: &ResolvedSubmission,
    ids: &SubmissionIds,
    records: &[ContentFileRecord],
) -> Result<XmlElement> {
    let expected = config.documents.len();
    if ids.documents.len() != expected {
        return Err(ManifestError::IdentifierMismatch {
            expected,
            actual: ids.documents.len(),
        });
    }
    if resolved.documents.len() != expected {
        return Err(ManifestError::ResolutionMismatch {
            expected,
            actual: resolved.documents.len(),
        });
    }

    let mut contexts = Vec::with_capacity(expected);
    let mut bodies = Vec::new();

    for ((document, resolution), document_ids) in config
        .documents
        .iter()
        .zip(&resolved.documents)
        .zip(&ids.documents)
    {
        let record = records
            .iter()
            .find(|record| record.document_index == resolution.index);
        let body = record.filter(|_| resolution.status.is_active());

        contexts.push(
            XmlElement::new("component")
                .child(
                    XmlElement::new("priorityNumber")
                        .attr("value", priority_number(resolution.index)),
                )
                .child(context_of_use(
                    resolution,
                    document_ids.context_of_use,
                    body.map(|_| document_ids.document),
                )),
        );

        if let Some(record) = body {
            bodies.push(XmlElement::new("component").child(document_body(
                document,
                document_ids.document,
                record,
            )));
        }
    }

    debug!(
        context_count = contexts.len(),
        document_count = bodies.len(),
        "built manifest components"
    );

    let unit_type = SubmissionUnitType::for_sequence(config.submission.sequence_number);
    let submission_unit = XmlElement::new("submissionUnit")
        .child(XmlElement::new("id").attr("root", ids.submission_unit))
        .child(code_element(submission_unit_type_code(unit_type)))
        .child(XmlElement::new("title").attr("value", &config.submission.title))
        .child(XmlElement::new("statusCode").attr("code", "active"))
        .children(contexts)
        .child(
            XmlElement::new("componentOf1")
                .child(
                    XmlElement::new("sequenceNumber")
                        .attr("value", config.submission.sequence_number),
                )
                .child(submission(config, resolved, ids, bodies)),
        );

    Ok(message_root().child(
        XmlElement::new("controlActProcess")
            .attr("classCode", "ACTN")
            .attr("moodCode", "EVN")
            .child(
                XmlElement::new("subject")
                    .attr("typeCode", "SUBJ")
                    .child(submission_unit),
            ),
    ))
}

fn submission(
    config: &SubmissionConfig,
    resolved: &ResolvedSubmission,
    ids: &SubmissionIds,
    bodies: Vec<XmlElement>,
) -> XmlElement {
    let contacts = config
        .present_contacts()
        .into_iter()
        .filter_map(|(role, contact)| {
            let id = match role {
                ContactRole::Regulatory => ids.contacts.regulatory,
                ContactRole::Technical => ids.contacts.technical,
            }?;
            Some(callback_contact(contact, id, contact_type_code(role)))
        });

    let application = &config.application;
    let application_element = XmlElement::new("application")
        .child(
            XmlElement::new("id").child(
                XmlElement::new("item")
                    .attr("root", US_APPLICATION_NUMBER)
                    .attr("extension", &application.number),
            ),
        )
        .child(code_element(application_type_code(
            application.application_type,
        )))
        .child(
            XmlElement::new("holder").child(
                XmlElement::new("applicant").child(
                    XmlElement::new("sponsorOrganization").child(
                        XmlElement::new("name")
                            .child(XmlElement::new("part").attr("value", &application.sponsor)),
                    ),
                ),
            ),
        )
        .child(
            XmlElement::new("subject")
                .child(XmlElement::new("reviewProcedure").child(XmlElement::new("code"))),
        )
        .children(bodies)
        .children(
            resolved
                .keyword_definitions
                .iter()
                .map(keyword_definition),
        );

    XmlElement::new("submission")
        .child(
            XmlElement::new("id")
                .attr("xsi:type", "DSET_II")
                .child(XmlElement::new("item").attr("root", ids.submission)),
        )
        .child(code_element(submission_type_code(
            config.submission.submission_type,
        )))
        .children(contacts)
        .child(XmlElement::new("componentOf").child(application_element))
}

fn context_of_use(
    resolution: &ResolvedDocument,
    id: EntityId,
    document_id: Option<EntityId>,
) -> XmlElement {
    let replacement = resolution.replaces.as_ref().map(|replaces| {
        XmlElement::new("replacementOf")
            .attr("typeCode", "RPLC")
            .child(
                XmlElement::new("relatedContextOfUse")
                    .child(XmlElement::new("id").attr("root", replaces)),
            )
    });
    let derived_from = document_id.map(|document_id| {
        XmlElement::new("derivedFrom").child(
            XmlElement::new("documentReference")
                .child(XmlElement::new("id").attr("root", document_id)),
        )
    });
    let references = resolution.references.iter().map(|reference| {
        XmlElement::new("referencedBy").attr("typeCode", "REFR").child(
            XmlElement::new("keyword").child(
                XmlElement::new("code")
                    .attr("code", &reference.code)
                    .attr("codeSystem", &reference.code_system),
            ),
        )
    });

    XmlElement::new("contextOfUse")
        .child(XmlElement::new("id").attr("root", id))
        .child(code_element(resolution.section.code_ref()))
        .child(XmlElement::new("statusCode").attr("code", resolution.status))
        .child_opt(replacement)
        .child_opt(derived_from)
        .children(references)
}

fn document_body(
    document: &DocumentConfig,
    id: EntityId,
    record: &ContentFileRecord,
) -> XmlElement {
    XmlElement::new("document")
        .child(XmlElement::new("id").attr("root", id))
        .child(XmlElement::new("title").attr("value", &document.title))
        .child(
            XmlElement::new("text")
                .attr("integrityCheckAlgorithm", INTEGRITY_CHECK_ALGORITHM)
                .child(XmlElement::new("reference").attr("value", &record.relative_path))
                .child(XmlElement::new("integrityCheck").text(&record.digest)),
        )
}

fn keyword_definition(definition: &KeywordDefinition) -> XmlElement {
    XmlElement::new("referencedBy").child(
        XmlElement::new("keywordDefinition")
            .child(code_element(definition.type_code))
            .child(XmlElement::new("statusCode").attr("code", "active"))
            .child(
                XmlElement::new("value").child(
                    XmlElement::new("item")
                        .attr("code", &definition.code)
                        .attr("codeSystem", &definition.code_system)
                        .child(
                            XmlElement::new("displayName")
                                .attr("value", &definition.display_name),
                        ),
                ),
            ),
    )
}

fn code_element(code: CodeRef) -> XmlElement {
    XmlElement::new("code")
        .attr("code", code.code)
        .attr("codeSystem", code.code_system)
}
