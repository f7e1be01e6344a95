//! Cursor over the output tree.

use crate::tree::{HtmlTree, NodeId};

/// Tags that receive list-item content.
pub(crate) const LIST_TAGS: &[&str] = &["ol", "ul", "li"];

/// Tags in which bold is implied and newlines are dropped.
pub(crate) const HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];

/// Mutable insertion point for one run.
///
/// Every run starts with the cursor on the root container. Elements opened
/// through the builder are counted so inline formatting can be unwound back
/// to the block-level node it started from.
pub struct TreeBuilder<'a> {
    tree: &'a mut HtmlTree,
    root: NodeId,
    active: NodeId,
    depth: usize,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder positioned on `root`.
    pub fn new(tree: &'a mut HtmlTree, root: NodeId) -> Self {
        Self {
            tree,
            root,
            active: root,
            depth: 0,
        }
    }

    /// The tree being built.
    pub fn tree(&self) -> &HtmlTree {
        self.tree
    }

    /// The outermost container.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node currently receiving children.
    pub fn active(&self) -> NodeId {
        self.active
    }

    /// Tag name of the active node.
    pub fn active_name(&self) -> Option<&str> {
        self.tree.name(self.active)
    }

    /// Whether the active node is one of the given tags.
    pub fn active_is(&self, names: &[&str]) -> bool {
        self.tree.is_named(self.active, names)
    }

    /// Number of elements opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Move the cursor without opening anything.
    pub fn move_to(&mut self, node: NodeId) {
        self.active = node;
    }

    /// Append an element under the cursor and move inside it.
    pub fn open<I, K, V>(&mut self, name: &str, attributes: I) -> NodeId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.active = self.tree.append_element(self.active, name, attributes);
        self.depth += 1;
        self.active
    }

    /// Append an attribute-less element under the cursor and move inside it.
    pub fn open_plain(&mut self, name: &str) -> NodeId {
        self.open(name, std::iter::empty::<(&str, &str)>())
    }

    /// Move the cursor to its parent. No-op on the root.
    pub fn close(&mut self) {
        if self.active == self.root {
            return;
        }
        if let Some(parent) = self.tree.parent(self.active) {
            self.active = parent;
            self.depth = self.depth.saturating_sub(1);
        }
    }

    /// Close elements until only `depth` remain open.
    pub fn close_to_depth(&mut self, depth: usize) {
        while self.depth > depth && self.active != self.root {
            self.close();
        }
    }

    /// Append a text node under the cursor.
    pub fn insert_text(&mut self, text: &str) {
        self.tree.append_text(self.active, text);
    }

    /// Append an empty element under the cursor without moving.
    pub fn insert_empty(&mut self, name: &str) {
        self.tree
            .append_element(self.active, name, std::iter::empty::<(&str, &str)>());
    }
}
