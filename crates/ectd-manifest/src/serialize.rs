//! XML text rendering of an element tree.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::element::{XmlElement, XmlNode};
use crate::error::{ManifestError, Result};

/// Indentation used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    pub indent_char: u8,
    pub indent_size: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent_char: b'\t',
            indent_size: 1,
        }
    }
}

impl SerializeOptions {
    pub fn spaces(indent_size: usize) -> Self {
        Self {
            indent_char: b' ',
            indent_size,
        }
    }
}

/// Write `root` as a UTF-8 XML document with prolog and trailing newline.
///
/// Empty nodes are dropped recursively, so an element whose only content is
/// empty children is not written at all. Text or attribute values holding a
/// character outside the XML 1.0 `Char` production fail with
/// [`ManifestError::InvalidXmlCharacter`].
pub fn write_document<W: Write>(
    root: &XmlElement,
    writer: W,
    options: SerializeOptions,
) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, options.indent_char, options.indent_size);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if !root.is_empty() {
        write_element(&mut xml, root)?;
    }
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render `root` into a string.
pub fn to_xml_string(root: &XmlElement, options: SerializeOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(root, &mut buffer, options)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        check_chars(element, value)?;
        start.push_attribute((name.as_str(), value.as_str()));
    }

    let mut content = element
        .children
        .iter()
        .filter(|node| !node.is_empty())
        .peekable();
    if content.peek().is_none() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    for node in content {
        match node {
            XmlNode::Element(child) => write_element(xml, child)?,
            XmlNode::Text(text) => {
                check_chars(element, text)?;
                xml.write_event(Event::Text(BytesText::new(text)))?;
            }
        }
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// XML 1.0 `Char`: tab, newline, carriage return and the non-surrogate ranges.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn check_chars(element: &XmlElement, value: &str) -> Result<()> {
    match value.chars().find(|ch| !is_xml_char(*ch)) {
        Some(character) => Err(ManifestError::InvalidXmlCharacter {
            element: element.name.clone(),
            character,
        }),
        None => Ok(()),
    }
}
