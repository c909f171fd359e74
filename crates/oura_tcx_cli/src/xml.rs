//! Explicitly built XML trees, serialized as pretty-printed documents.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlWriteError {
    #[error("xml write error: {0}")]
    Write(#[from] quick_xml::Error),
    #[error("xml output was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One node in a document tree.
///
/// An element carries either child elements or text content. A leaf with
/// no text set still renders an empty text node (`<Name></Name>`) so that
/// an absent value degrades to an empty field instead of failing the
/// whole document.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    #[must_use]
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Serialize this element as a standalone UTF-8 document with an XML
    /// declaration and two-space indentation.
    pub fn to_document(&self) -> Result<String, XmlWriteError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write_into(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), XmlWriteError> {
        let mut start = BytesStart::new(self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((*key, value.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        if self.children.is_empty() {
            // Keeps the closing tag on the same line as the content.
            writer.write_event(Event::Text(BytesText::new(
                self.text.as_deref().unwrap_or(""),
            )))?;
        } else {
            for child in &self.children {
                child.write_into(writer)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name)))?;
        Ok(())
    }
}
