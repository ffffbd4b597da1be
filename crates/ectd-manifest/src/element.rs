//! In-memory XML element tree.
//!
//! Attributes and child nodes are kept apart so that attribute-vs-element
//! placement never depends on naming conventions. Attribute names may be
//! qualified (`xsi:type`); the tree stores them verbatim.

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlNode {
    /// A node is empty when serializing it would produce nothing meaningful.
    pub fn is_empty(&self) -> bool {
        match self {
            XmlNode::Element(element) => element.is_empty(),
            XmlNode::Text(text) => text.is_empty(),
        }
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    #[must_use]
    pub fn child_opt(mut self, child: Option<XmlElement>) -> Self {
        if let Some(child) = child {
            self.children.push(XmlNode::Element(child));
        }
        self
    }

    /// Append repeated children, all written under their own names.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = XmlElement>,
    {
        self.children
            .extend(children.into_iter().map(XmlNode::Element));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// No attributes, no text and no non-empty children.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.iter().all(XmlNode::is_empty)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First direct child with the given name.
    pub fn first(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|element| element.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.child_elements()
            .filter(move |element| element.name == name)
    }

    /// Follow a `/`-separated path of child names, taking the first match at
    /// each step.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |element, segment| element.first(segment))
    }

    /// Concatenated direct text content.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness_is_recursive() {
        let empty = XmlElement::new("subject")
            .child(XmlElement::new("reviewProcedure").child(XmlElement::new("code")));
        assert!(empty.is_empty());

        let with_attr = XmlElement::new("subject")
            .child(XmlElement::new("code").attr("code", "x"));
        assert!(!with_attr.is_empty());

        assert!(XmlElement::new("a").text("").is_empty());
        assert!(!XmlElement::new("a").text("b").is_empty());
    }

    #[test]
    fn find_follows_first_match() {
        let tree = XmlElement::new("root")
            .child(XmlElement::new("item").attr("n", 1))
            .child(XmlElement::new("item").attr("n", 2).child(XmlElement::new("leaf")));
        assert_eq!(tree.find("item").and_then(|e| e.attribute("n")), Some("1"));
        assert!(tree.find("item/leaf").is_none());
        assert_eq!(tree.all("item").count(), 2);
        assert_eq!(tree.find("").map(|e| e.name.as_str()), Some("root"));
    }
}
