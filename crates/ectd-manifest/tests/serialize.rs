//! Snapshot of the rendered element tree.

use ectd_manifest::{SerializeOptions, XmlElement, to_xml_string};

fn document_component() -> XmlElement {
    XmlElement::new("component").child(
        XmlElement::new("document")
            .child(XmlElement::new("id").attr("root", "6f1c2a9e-0000-4000-8000-000000000001"))
            .child(XmlElement::new("title").attr("value", "Cover & Letter"))
            .child(
                XmlElement::new("text")
                    .attr("integrityCheckAlgorithm", "SHA256")
                    .child(XmlElement::new("reference").attr("value", "m1/cover-123456_1.pdf"))
                    .child(XmlElement::new("integrityCheck").text("abc123")),
            ),
    )
}

#[test]
fn renders_nested_tree_with_suppressed_nodes() {
    let tree = XmlElement::new("application")
        .child(
            XmlElement::new("id").child(
                XmlElement::new("item")
                    .attr("root", "2.16.840.1.113883.3.989.5.1.2.2.1.16.1")
                    .attr("extension", "123456"),
            ),
        )
        .child(
            XmlElement::new("subject")
                .child(XmlElement::new("reviewProcedure").child(XmlElement::new("code"))),
        )
        .child(document_component())
        .child(
            XmlElement::new("telecom")
                .attr("xsi:type", "BAG_TEL")
                .child(XmlElement::new("item").attr("value", "tel:111"))
                .child(XmlElement::new("item").attr("value", "mailto:a@b.co")),
        );

    let xml = to_xml_string(&tree, SerializeOptions::spaces(2)).expect("serialize");
    insta::assert_snapshot!(xml.trim_end(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <application>
      <id>
        <item root="2.16.840.1.113883.3.989.5.1.2.2.1.16.1" extension="123456"/>
      </id>
      <component>
        <document>
          <id root="6f1c2a9e-0000-4000-8000-000000000001"/>
          <title value="Cover &amp; Letter"/>
          <text integrityCheckAlgorithm="SHA256">
            <reference value="m1/cover-123456_1.pdf"/>
            <integrityCheck>abc123</integrityCheck>
          </text>
        </document>
      </component>
      <telecom xsi:type="BAG_TEL">
        <item value="tel:111"/>
        <item value="mailto:a@b.co"/>
      </telecom>
    </application>
    "#);
}

#[test]
fn tab_indentation_by_default() {
    let xml = to_xml_string(&document_component(), SerializeOptions::default()).expect("serialize");
    assert!(xml.contains("\n\t<document>\n\t\t<id "));
    assert!(xml.contains("\n\t\t\t<integrityCheck>abc123</integrityCheck>\n\t\t</text>"));
}
