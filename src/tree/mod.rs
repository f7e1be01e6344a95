//! Output tree: a small arena-backed markup tree.
//!
//! Nodes are addressed by [`NodeId`] and never removed, so ids stay valid for
//! the lifetime of the tree. The root is a fragment node that serializes as
//! its children only.

mod serialize;

pub use serialize::HtmlWriter;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Handle to a node in an [`HtmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of the node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The root container
    Fragment,

    /// A named element with ordered attributes
    Element {
        /// Tag name
        name: String,
        /// Attributes in insertion order
        attributes: Vec<(String, String)>,
    },

    /// Literal text
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// Arena-backed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTree {
    nodes: Vec<NodeData>,
}

impl HtmlTree {
    /// Create a tree holding only an empty root fragment.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Fragment,
            }],
        }
    }

    /// The root fragment.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Whether the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a new element as the last child of `parent`.
    pub fn append_element<I, K, V>(&mut self, parent: NodeId, name: &str, attributes: I) -> NodeId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let kind = NodeKind::Element {
            name: name.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        };
        self.push_child(parent, kind)
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_child(parent, NodeKind::Text(text.into()))
    }

    fn push_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Node contents.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Tag name of an element node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether `id` is an element with one of the given tag names.
    pub fn is_named(&self, id: NodeId, names: &[&str]) -> bool {
        self.name(id).is_some_and(|name| names.contains(&name))
    }

    /// Parent of a node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of a node in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Attribute value on the node itself.
    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Attribute value on the node or its nearest ancestor carrying it.
    pub fn inherited_attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(value) = self.attribute(node, key) {
                return Some(value);
            }
            current = self.parent(node);
        }
        None
    }

    /// Last child that is an element.
    pub fn last_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .rev()
            .copied()
            .find(|child| self.name(*child).is_some())
    }

    /// Descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// First descendant in document order matching `predicate`.
    pub fn find_descendant<F>(&self, id: NodeId, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&HtmlTree, NodeId) -> bool,
    {
        self.descendants(id).find(|node| predicate(self, *node))
    }

    /// `id` itself if it matches, otherwise its first matching descendant.
    pub fn find_self_or_descendant<F>(&self, id: NodeId, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&HtmlTree, NodeId) -> bool,
    {
        if predicate(self, id) {
            return Some(id);
        }
        self.find_descendant(id, predicate)
    }

    /// Last descendant element with the given tag name.
    pub fn last_descendant_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(id)
            .filter(|node| self.name(*node) == Some(name))
            .last()
    }

    /// Number of elements with the given tag name anywhere in the tree.
    pub fn count_elements(&self, name: &str) -> usize {
        self.descendants(self.root())
            .filter(|node| self.name(*node) == Some(name))
            .count()
    }

    /// Concatenated text of a node's subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        if let NodeKind::Text(t) = self.kind(id) {
            text.push_str(t);
        }
        for node in self.descendants(id) {
            if let NodeKind::Text(t) = self.kind(node) {
                text.push_str(t);
            }
        }
        text
    }

    /// Borrowed view of a node, serializable with serde.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// Serialize the whole tree to HTML.
    pub fn to_html(&self) -> crate::Result<String> {
        let mut writer = HtmlWriter::new();
        writer.write_node(self, self.root())?;
        Ok(writer.into_string())
    }
}

impl Default for HtmlTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Preorder iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a HtmlTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(node).iter().rev().copied());
        Some(node)
    }
}

/// A node together with the tree it lives in.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a HtmlTree,
    id: NodeId,
}

struct Attributes<'a>(&'a [(String, String)]);

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct Children<'a>(NodeRef<'a>);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let NodeRef { tree, id } = self.0;
        let children = tree.children(id);
        let mut seq = serializer.serialize_seq(Some(children.len()))?;
        for child in children {
            seq.serialize_element(&tree.node(*child))?;
        }
        seq.end()
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.tree.kind(self.id) {
            NodeKind::Fragment => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("children", &Children(*self))?;
                map.end()
            }
            NodeKind::Element { name, attributes } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("tag", name)?;
                if !attributes.is_empty() {
                    map.serialize_entry("attributes", &Attributes(attributes))?;
                }
                map.serialize_entry("children", &Children(*self))?;
                map.end()
            }
            NodeKind::Text(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("text", text)?;
                map.end()
            }
        }
    }
}

impl Serialize for HtmlTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.node(self.root()).serialize(serializer)
    }
}
