//! Minimal element tree for SAP SOAP payloads.
//!
//! SAP responses only need element names, text and nesting; attributes and
//! namespace URIs are dropped. Element names keep their prefix so callers can
//! log what SAP actually sent, while lookups go through the local name.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{Result, SapError};

/// One XML element with its text content and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child element, returning `self` for chaining.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content, returning `self` for chaining.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Qualified name as written in the document, e.g. `soap-env:Body`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix, e.g. `Body`.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child whose local name equals `local`.
    pub fn child(&self, local: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All children whose local name equals `local`, in document order.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.local_name() == local)
    }

    /// Text of the child element `local`, if that element exists.
    pub fn field(&self, local: &str) -> Option<&str> {
        self.child(local).map(XmlNode::text)
    }

    /// Rows of an RFC table parameter: the `item` children of `table`.
    ///
    /// A missing table, an empty table, a single item and many items all come
    /// back as a list, so mappers never see a bare row.
    pub fn items(&self, table: &str) -> Vec<&XmlNode> {
        self.child(table)
            .map(|t| t.children_named("item").collect())
            .unwrap_or_default()
    }
}

/// Strips a namespace prefix from a qualified element name.
pub fn local_name(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map_or(qualified, |(_, local)| local)
}

/// Parses an XML document into its root element.
pub fn parse_document(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            SapError::Xml(format!("at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push(XmlNode::new(name));
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                attach(&mut stack, &mut root, XmlNode::new(name))?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| SapError::Xml("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    let value = text
                        .unescape()
                        .map_err(|e| SapError::Xml(format!("bad text content: {e}")))?;
                    current.text.push_str(&value);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SapError::Xml(format!(
            "document ended inside <{}>",
            open.name()
        )));
    }
    root.ok_or_else(|| SapError::Xml("document has no root element".to_string()))
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(SapError::Xml("multiple root elements".to_string())),
    }
    Ok(())
}
