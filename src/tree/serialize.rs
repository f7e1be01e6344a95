//! HTML serialization of an [`HtmlTree`].

use super::{HtmlTree, NodeId, NodeKind};
use crate::error::{Error, Result};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "meta", "link"];

/// Streaming HTML writer.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buffer: String,
    tag_opened: bool,
}

impl HtmlWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the writer and return the generated HTML.
    pub fn into_string(mut self) -> String {
        self.ensure_tag_closed();
        self.buffer
    }

    fn ensure_tag_closed(&mut self) {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
    }

    /// Start a tag; attributes may follow until the next write.
    pub fn start_tag(&mut self, tag_name: &str) -> Result<()> {
        if !is_safe_tag_name(tag_name) {
            return Err(Error::Render(format!("invalid tag name: {tag_name:?}")));
        }
        self.ensure_tag_closed();
        self.buffer.push('<');
        self.buffer.push_str(tag_name);
        self.tag_opened = true;
        Ok(())
    }

    /// Add an attribute to the tag being started.
    pub fn attribute(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.tag_opened {
            return Err(Error::Render(
                "cannot write attribute: no tag is currently open".to_string(),
            ));
        }
        if !is_safe_attribute_name(key) {
            return Err(Error::Render(format!("invalid attribute name: {key:?}")));
        }
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer
            .push_str(html_escape::encode_double_quoted_attribute(value).as_ref());
        self.buffer.push('"');
        Ok(())
    }

    /// Close a tag.
    pub fn end_tag(&mut self, tag_name: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str("</");
        self.buffer.push_str(tag_name);
        self.buffer.push('>');
    }

    /// Write escaped text.
    pub fn text(&mut self, text: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str(html_escape::encode_text(text).as_ref());
    }

    /// Write markup verbatim.
    pub fn raw(&mut self, html: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str(html);
    }

    /// Write a node and its subtree.
    pub fn write_node(&mut self, tree: &HtmlTree, id: NodeId) -> Result<()> {
        match tree.kind(id) {
            NodeKind::Fragment => {
                for child in tree.children(id) {
                    self.write_node(tree, *child)?;
                }
            }
            NodeKind::Text(text) => self.text(text),
            NodeKind::Element { name, attributes } => {
                self.start_tag(name)?;
                for (key, value) in attributes {
                    self.attribute(key, value)?;
                }
                self.ensure_tag_closed();

                if VOID_ELEMENTS.contains(&name.as_str()) {
                    return Ok(());
                }

                for child in tree.children(id) {
                    self.write_node(tree, *child)?;
                }
                self.end_tag(name);
            }
        }
        Ok(())
    }
}

fn is_safe_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':')
}

fn is_safe_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}
