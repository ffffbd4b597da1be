//! Callback contact parties.

use ectd_model::{Contact, EntityId};
use ectd_standards::CodeRef;

use crate::element::XmlElement;

const DEFAULT_ORGANIZATION: &str = "Organization";

/// `callBackContact` element for one present contact.
pub(crate) fn callback_contact(
    contact: &Contact,
    id: EntityId,
    contact_type: CodeRef,
) -> XmlElement {
    let party = XmlElement::new("contactParty")
        .child(XmlElement::new("id").attr("root", id))
        .child(
            XmlElement::new("code")
                .attr("code", contact_type.code)
                .attr("codeSystem", contact_type.code_system),
        )
        .child(XmlElement::new("statusCode").attr("code", "active"))
        .child(contact_person(contact));
    XmlElement::new("callBackContact").child(party)
}

fn contact_person(contact: &Contact) -> XmlElement {
    let organization = contact
        .organization
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_ORGANIZATION);

    XmlElement::new("contactPerson")
        .child(XmlElement::new("name").children(name_parts(contact)))
        .child(
            XmlElement::new("telecom")
                .attr("xsi:type", "BAG_TEL")
                .children(telecom_items(contact)),
        )
        .child(
            XmlElement::new("asAgent").child(
                XmlElement::new("representedOrganization").child(
                    XmlElement::new("name")
                        .child(XmlElement::new("part").attr("value", organization)),
                ),
            ),
        )
}

fn name_parts(contact: &Contact) -> Vec<XmlElement> {
    let mut parts = vec![
        XmlElement::new("part")
            .attr("type", "GIV")
            .attr("value", &contact.first_name),
    ];
    if let Some(middle) = present(contact.middle_name.as_deref()) {
        parts.push(
            XmlElement::new("part")
                .attr("type", "GIV")
                .attr("value", middle)
                .attr("qualifier", "MID"),
        );
    }
    parts.push(
        XmlElement::new("part")
            .attr("type", "FAM")
            .attr("value", &contact.last_name),
    );
    parts
}

fn telecom_items(contact: &Contact) -> Vec<XmlElement> {
    let tel = |number: &str, usage: &str, capabilities: &str| {
        XmlElement::new("item")
            .attr("value", format!("tel:{number}"))
            .attr("use", usage)
            .attr("capabilities", capabilities)
    };

    let mut items = Vec::with_capacity(4);
    if let Some(phone) = present(contact.phone.as_deref()) {
        items.push(tel(phone, "WP", "voice"));
    }
    if let Some(mobile) = present(contact.mobile.as_deref()) {
        items.push(tel(mobile, "MC", "voice"));
    }
    if let Some(fax) = present(contact.fax.as_deref()) {
        items.push(tel(fax, "WP", "fax"));
    }
    if !contact.email.is_empty() {
        items.push(XmlElement::new("item").attr("value", format!("mailto:{}", contact.email)));
    }
    items
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
