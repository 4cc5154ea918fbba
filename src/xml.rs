//! Minimal owned XML tree for TEI output.
//!
//! Records render into detached [`Element`] fragments. Nothing is shared
//! between fragments, so they can be built independently and handed to the
//! single [`Document`] that owns the final tree.

use crate::error::TeiError;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element holding a single text node.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.children.push(Node::Text(text.into()));
        element
    }

    /// Sets an attribute, replacing any previous value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends the child when there is one.
    pub fn append_opt(&mut self, child: Option<Element>) {
        if let Some(child) = child {
            self.append(child);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// All child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |e| e.name == name)
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), TeiError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write(writer)?,
                Node::Text(text) => {
                    // Quotes only need escaping inside attributes.
                    let escaped = BytesText::from_escaped(partial_escape(text));
                    writer.write_event(Event::Text(escaped))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// A complete XML document with a single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Writes the document, with an XML declaration, indented by `indent` spaces.
    ///
    /// An indent of zero writes everything on one line.
    pub fn write_to<W: Write>(&self, inner: W, indent: usize) -> Result<(), TeiError> {
        let mut writer = if indent == 0 {
            Writer::new(inner)
        } else {
            Writer::new_with_indent(inner, b' ', indent)
        };
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.root.write(&mut writer)?;
        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Serializes the document into a string.
    pub fn to_xml_string(&self, indent: usize) -> Result<String, TeiError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, indent)?;
        // The writer only ever receives `&str` input.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_builders() {
        let mut element = Element::new("biblScope").attr("unit", "volume");
        element.set_attribute("unit", "issue");
        element.append(Element::with_text("note", "x"));
        element.append_opt(None);

        assert_eq!(element.attribute("unit"), Some("issue"));
        assert_eq!(element.attributes().len(), 1);
        assert_eq!(element.elements().count(), 1);
        assert_eq!(element.child("note").map(Element::text), Some("x".to_string()));
        assert!(element.child("missing").is_none());
    }

    #[test]
    fn test_serialize_compact() {
        let mut root = Element::new("listBibl");
        root.append(Element::with_text("title", "A & B").attr("level", "s"));
        root.append(Element::new("imprint"));

        let xml = Document::new(root).to_xml_string(0).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <listBibl><title level=\"s\">A &amp; B</title><imprint/></listBibl>\n"
        );
    }

    #[test]
    fn test_text_quotes_are_not_escaped() {
        let mut root = Element::new("listBibl");
        root.append(Element::with_text("title", r#"the 'scare' "quotes" <b>"#).attr("n", "'\""));

        let xml = Document::new(root).to_xml_string(0).unwrap();
        assert!(xml.contains(r#">the 'scare' "quotes" &lt;b&gt;</title>"#));
        assert!(xml.contains(r#"n="&apos;&quot;""#));
    }

    #[test]
    fn test_serialize_indented_keeps_text_inline() {
        let mut inner = Element::new("monogr");
        inner.append(Element::with_text("title", "Book"));
        let mut root = Element::new("listBibl");
        root.append(inner);

        let xml = Document::new(root).to_xml_string(2).unwrap();
        assert!(xml.contains("\n  <monogr>"));
        assert!(xml.contains("\n    <title>Book</title>"));
        assert!(xml.ends_with("</listBibl>\n"));
    }

    #[test]
    fn test_empty_root_is_self_closing() {
        let xml = Document::new(Element::new("listBibl"))
            .to_xml_string(2)
            .unwrap();
        assert!(xml.contains("<listBibl/>"));
    }
}
