//! List and indent placement.
//!
//! Notes store list structure as a flat sequence of runs, each carrying its
//! own indent amount. Nesting is recovered by comparing a run with its
//! predecessor and moving the cursor into a container opened by an earlier
//! run. Containers are never closed between runs; each one records the depth
//! it represents in [`INDENT_MARKER`] so later runs can find their way back.

use crate::model::{Run, StyleType};
use crate::tree::{HtmlTree, NodeId};

use super::builder::TreeBuilder;

/// Attribute recording the indent depth a list container represents.
pub const INDENT_MARKER: &str = "data-indent-amount";

/// Kind of container a list-like run renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ol>`
    Numbered,
    /// `<ul class="dotted">`
    Dotted,
    /// `<ul class="dashed">`
    Dashed,
    /// `<ul class="checklist">`
    Checklist,
    /// `<ul class="none">` for indented paragraphs that are not list items
    Plain,
}

impl ListKind {
    /// Container kind for a run, or `None` if the run is not list-like.
    pub fn for_run(run: &Run) -> Option<Self> {
        match run.style_type() {
            StyleType::NumberedList => Some(ListKind::Numbered),
            StyleType::DottedList => Some(ListKind::Dotted),
            StyleType::DashedList => Some(ListKind::Dashed),
            StyleType::Checkbox => Some(ListKind::Checklist),
            _ if run.indent() > 0 => Some(ListKind::Plain),
            _ => None,
        }
    }

    /// Container tag name.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Numbered => "ol",
            _ => "ul",
        }
    }

    /// Container class.
    pub fn class(self) -> Option<&'static str> {
        match self {
            ListKind::Numbered => None,
            ListKind::Dotted => Some("dotted"),
            ListKind::Dashed => Some("dashed"),
            ListKind::Checklist => Some("checklist"),
            ListKind::Plain => Some("none"),
        }
    }
}

/// The preceding run and whether it left its list item open.
#[derive(Debug, Clone, Copy)]
pub struct PreviousRun<'r> {
    /// The run itself
    pub run: &'r Run,
    /// True unless the run's text ended with a newline
    pub tag_open: bool,
}

/// Where the cursor went before materializing containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// Style changed at indent 0: start a new top-level block
    Fresh,
    /// Nest beneath the last list item of the latest top-level block
    Descend,
    /// Reuse the container whose marker matches this run's indent
    Marker,
    /// No container matched; back to the root
    MarkerMiss,
    /// Previous run was not list-like; stay where block handling left us
    Outermost,
}

/// Move the cursor to where a list-like run attaches.
pub fn relocate(builder: &mut TreeBuilder<'_>, run: &Run, previous: Option<PreviousRun<'_>>) -> Relocation {
    let indent = run.indent();
    let mut depth = indent as i64;
    if !run.is_any_list() {
        depth -= 1;
    }

    let previous_style = previous.map(|p| p.run.style_type());
    if previous_style != Some(run.style_type()) && indent == 0 {
        return Relocation::Fresh;
    }

    let Some(previous) = previous else {
        return Relocation::Outermost;
    };
    let previous_indent = previous.run.indent();
    if !(previous.run.is_any_list() || previous_indent > 0) {
        return Relocation::Outermost;
    }

    let root = builder.root();
    let latest_block = builder.tree().last_element_child(root);

    if indent > previous_indent || (indent == previous_indent && previous.tag_open) {
        let target = latest_block
            .and_then(|block| builder.tree().last_descendant_named(block, "li"))
            .unwrap_or(root);
        builder.move_to(target);
        return Relocation::Descend;
    }

    if depth < 0 {
        return Relocation::Outermost;
    }

    let target = latest_block.and_then(|block| {
        builder
            .tree()
            .find_self_or_descendant(block, |tree, node| marker_of(tree, node) == Some(indent))
    });
    match target {
        Some(node) => {
            builder.move_to(node);
            Relocation::Marker
        }
        None => {
            builder.move_to(root);
            Relocation::MarkerMiss
        }
    }
}

/// Open the containers between the cursor's depth and `indent`.
///
/// Returns the number of list containers opened.
pub fn materialize(builder: &mut TreeBuilder<'_>, kind: ListKind, indent: usize) -> usize {
    let start = builder
        .tree()
        .inherited_attribute(builder.active(), INDENT_MARKER)
        .and_then(|value| value.parse::<usize>().ok())
        .map_or(0, |marker| marker + 1);

    let mut opened = 0;
    for (index, level) in (start..=indent).enumerate() {
        if index > 0 {
            builder.open_plain("li");
        }

        let mut attributes: Vec<(&str, String)> = Vec::with_capacity(2);
        if let Some(class) = kind.class() {
            attributes.push(("class", class.to_string()));
        }
        attributes.push((INDENT_MARKER, level.to_string()));
        builder.open(kind.tag(), attributes);
        opened += 1;
    }

    log::trace!(
        "Materialized {} {} container(s) for indent {} starting at {}",
        opened,
        kind.tag(),
        indent,
        start
    );
    opened
}

fn marker_of(tree: &HtmlTree, node: NodeId) -> Option<usize> {
    tree.attribute(node, INDENT_MARKER)
        .and_then(|value| value.parse().ok())
}
