//! Structural rules for the submission configuration document.
//!
//! Every rule runs against the raw JSON value so that all violations are
//! reported together, each with the JSON pointer of the offending node.

use std::collections::HashMap;
use std::sync::LazyLock;

use ectd_model::{ApplicationType, CtdModule, KeywordType, Operation, SubmissionType};
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::issue::ValidationIssue;

static APPLICATION_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid application number regex"));

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static OID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("Invalid OID regex"));

/// Validate a configuration document, collecting every violation.
pub fn validate_value(value: &Value) -> Vec<ValidationIssue> {
    let mut checker = Checker::default();
    let Some(root) = checker.object(value, "") else {
        return checker.issues;
    };

    if let Some(application) = checker.required(root, "", "application") {
        check_application(&mut checker, application, "/application");
    }
    if let Some(submission) = checker.required(root, "", "submission") {
        check_submission(&mut checker, submission, "/submission");
    }
    if let Some(contacts) = root.get("contacts") {
        check_contacts(&mut checker, contacts, "/contacts");
    }
    if let Some(documents) = root.get("documents")
        && let Some(items) = checker.array(documents, "/documents")
    {
        for (index, document) in items.iter().enumerate() {
            check_document(&mut checker, document, &format!("/documents/{index}"));
        }
    }
    if let Some(keywords) = root.get("keywords")
        && let Some(items) = checker.array(keywords, "/keywords")
    {
        check_keywords(&mut checker, items);
    }

    checker.issues
}

fn check_application(checker: &mut Checker, value: &Value, location: &str) {
    let Some(application) = checker.object(value, location) else {
        return;
    };
    let allowed: Vec<&str> = ApplicationType::ALL
        .iter()
        .map(ApplicationType::as_str)
        .collect();
    checker.required_enum(application, location, "type", &allowed);

    if let Some(number) = checker.required_string(application, location, "number")
        && !APPLICATION_NUMBER_REGEX.is_match(number)
    {
        checker.push(
            pointer(location, "number"),
            "must be a six-digit application number",
        );
    }
    checker.required_non_empty(application, location, "sponsor");
}

fn check_submission(checker: &mut Checker, value: &Value, location: &str) {
    let Some(submission) = checker.object(value, location) else {
        return;
    };
    let allowed: Vec<&str> = SubmissionType::ALL
        .iter()
        .map(SubmissionType::as_str)
        .collect();
    checker.required_enum(submission, location, "type", &allowed);

    if let Some(sequence) = checker.required(submission, location, "sequenceNumber") {
        let sequence_location = pointer(location, "sequenceNumber");
        match sequence.as_u64() {
            Some(0) => checker.push(sequence_location, "must be greater than or equal to 1"),
            Some(n) if u32::try_from(n).is_err() => {
                checker.push(sequence_location, format!("must be at most {}", u32::MAX));
            }
            Some(_) => {}
            None if sequence.as_i64().is_some() => {
                checker.push(sequence_location, "must be greater than or equal to 1");
            }
            None => checker.push(sequence_location, "must be a positive integer"),
        }
    }
    checker.required_non_empty(submission, location, "title");
}

fn check_contacts(checker: &mut Checker, value: &Value, location: &str) {
    let Some(contacts) = checker.object(value, location) else {
        return;
    };
    for role in ["regulatory", "technical"] {
        if let Some(contact) = contacts.get(role) {
            check_contact(checker, contact, &pointer(location, role));
        }
    }
}

fn check_contact(checker: &mut Checker, value: &Value, location: &str) {
    let Some(contact) = checker.object(value, location) else {
        return;
    };
    checker.required_non_empty(contact, location, "firstName");
    checker.required_non_empty(contact, location, "lastName");
    if let Some(email) = checker.required_string(contact, location, "email")
        && !EMAIL_REGEX.is_match(email)
    {
        checker.push(pointer(location, "email"), "must be a valid email address");
    }
    for optional in ["middleName", "phone", "fax", "mobile", "organization"] {
        checker.optional_string(contact, location, optional);
    }
}

fn check_document(checker: &mut Checker, value: &Value, location: &str) {
    let Some(document) = checker.object(value, location) else {
        return;
    };
    let modules: Vec<&str> = CtdModule::ALL.iter().map(CtdModule::as_str).collect();
    checker.required_enum(document, location, "module", &modules);
    checker.required_string(document, location, "type");
    checker.required_non_empty(document, location, "title");

    let operations: Vec<&str> = Operation::ALL.iter().map(Operation::as_str).collect();
    let operation = document
        .get("operation")
        .and_then(|value| checker.enum_string(value, &pointer(location, "operation"), &operations));

    let replaces_id = checker.optional_string(document, location, "replacesId");
    if let Some(replaces_id) = replaces_id
        && Uuid::parse_str(replaces_id).is_err()
    {
        checker.push(pointer(location, "replacesId"), "must be a UUID");
    }
    if operation == Some(Operation::Replace.as_str()) && !document.contains_key("replacesId") {
        checker.push(
            pointer(location, "replacesId"),
            "is required when operation is \"replace\"",
        );
    }

    checker.optional_string(document, location, "filePath");

    if let Some(refs) = document.get("keywordRefs") {
        let refs_location = pointer(location, "keywordRefs");
        match refs.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        checker.push(format!("{refs_location}/{index}"), "must be a string");
                    }
                }
            }
            None => checker.push(refs_location, "must be an array of strings"),
        }
    }
}

fn check_keywords(checker: &mut Checker, items: &[Value]) {
    let types: Vec<&str> = KeywordType::ALL.iter().map(KeywordType::as_str).collect();
    let mut seen_codes: HashMap<&str, usize> = HashMap::new();

    for (index, value) in items.iter().enumerate() {
        let location = format!("/keywords/{index}");
        let Some(keyword) = checker.object(value, &location) else {
            continue;
        };
        checker.required_enum(keyword, &location, "type", &types);

        if let Some(code) = checker.required_non_empty(keyword, &location, "code") {
            if let Some(first) = seen_codes.get(code) {
                checker.push(
                    pointer(&location, "code"),
                    format!("duplicates keyword code \"{code}\" declared at /keywords/{first}"),
                );
            } else {
                seen_codes.insert(code, index);
            }
        }

        if let Some(code_system) = checker.required_string(keyword, &location, "codeSystem")
            && !OID_REGEX.is_match(code_system)
        {
            checker.push(
                pointer(&location, "codeSystem"),
                "must be an OID of digits and dots",
            );
        }
        checker.required_non_empty(keyword, &location, "displayName");
    }
}

/// XML 1.0 `Char` production; everything else cannot reach the manifest.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn pointer(parent: &str, key: &str) -> String {
    let escaped = key.replace('~', "~0").replace('/', "~1");
    format!("{parent}/{escaped}")
}

/// Accumulates issues while walking the document.
#[derive(Default)]
struct Checker {
    issues: Vec<ValidationIssue>,
}

impl Checker {
    fn push(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(location, message));
    }

    fn object<'a>(&mut self, value: &'a Value, location: &str) -> Option<&'a Map<String, Value>> {
        let object = value.as_object();
        if object.is_none() {
            self.push(location, "must be an object");
        }
        object
    }

    fn array<'a>(&mut self, value: &'a Value, location: &str) -> Option<&'a Vec<Value>> {
        let array = value.as_array();
        if array.is_none() {
            self.push(location, "must be an array");
        }
        array
    }

    fn required<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        location: &str,
        key: &str,
    ) -> Option<&'a Value> {
        let value = object.get(key);
        if value.is_none() {
            self.push(pointer(location, key), "is required");
        }
        value
    }

    fn string<'a>(&mut self, value: &'a Value, location: &str) -> Option<&'a str> {
        let Some(string) = value.as_str() else {
            self.push(location, "must be a string");
            return None;
        };
        if let Some(ch) = string.chars().find(|ch| !is_xml_char(*ch)) {
            self.push(
                location,
                format!(
                    "must not contain U+{:04X}, which XML 1.0 does not allow",
                    u32::from(ch)
                ),
            );
        }
        Some(string)
    }

    fn required_string<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        location: &str,
        key: &str,
    ) -> Option<&'a str> {
        let value = self.required(object, location, key)?;
        self.string(value, &pointer(location, key))
    }

    fn optional_string<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        location: &str,
        key: &str,
    ) -> Option<&'a str> {
        let value = object.get(key)?;
        self.string(value, &pointer(location, key))
    }

    fn required_non_empty<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        location: &str,
        key: &str,
    ) -> Option<&'a str> {
        let value = self.required_string(object, location, key)?;
        if value.is_empty() {
            self.push(pointer(location, key), "must not be empty");
            return None;
        }
        Some(value)
    }

    fn enum_string<'a>(
        &mut self,
        value: &'a Value,
        location: &str,
        allowed: &[&str],
    ) -> Option<&'a str> {
        let value = self.string(value, location)?;
        if !allowed.contains(&value) {
            self.push(location, format!("must be one of: {}", allowed.join(", ")));
            return None;
        }
        Some(value)
    }

    fn required_enum<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        location: &str,
        key: &str,
        allowed: &[&str],
    ) -> Option<&'a str> {
        let value = self.required(object, location, key)?;
        self.enum_string(value, &pointer(location, key), allowed)
    }
}
