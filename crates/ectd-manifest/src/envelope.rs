//! Message envelope around the submission unit.

use ectd_standards::code_systems::IMPLEMENTATION_GUIDES;

use crate::element::XmlElement;

pub const ROOT_ELEMENT: &str = "PORP_IN000001UV";
pub const HL7_NAMESPACE: &str = "urn:hl7-org:v3";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str = "urn:hl7-org:v3 PORP_IN000001UV.xsd";

/// Root element with namespace declarations and the message header.
///
/// Header slots without content are present in the tree and dropped at
/// serialization.
pub(crate) fn message_root() -> XmlElement {
    XmlElement::new(ROOT_ELEMENT)
        .attr("ITSVersion", "XML_1.0")
        .attr("xmlns", HL7_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .attr("xsi:schemaLocation", SCHEMA_LOCATION)
        .child(XmlElement::new("id"))
        .child(XmlElement::new("creationTime"))
        .child(XmlElement::new("interactionId"))
        .child(XmlElement::new("processingCode"))
        .child(XmlElement::new("processingModeCode"))
        .child(XmlElement::new("acceptAckCode"))
        .child(receiver())
        .child(sender())
}

fn receiver() -> XmlElement {
    let guides = IMPLEMENTATION_GUIDES.iter().map(|guide| {
        XmlElement::new("item")
            .attr("root", guide.root)
            .attr("identifierName", guide.name)
    });
    XmlElement::new("receiver")
        .attr("typeCode", "RCV")
        .child(device().child(XmlElement::new("id").children(guides)))
}

fn sender() -> XmlElement {
    XmlElement::new("sender")
        .attr("typeCode", "SND")
        .child(device().child(XmlElement::new("id")))
}

fn device() -> XmlElement {
    XmlElement::new("device")
        .attr("classCode", "DEV")
        .attr("determinerCode", "INSTANCE")
}
