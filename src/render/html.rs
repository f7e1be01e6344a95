//! HTML rendering of note bodies.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{Note, Run, RunSequence, LINE_SEPARATOR};
use crate::tree::{HtmlTree, NodeId};

use super::builder::{TreeBuilder, HEADING_TAGS, LIST_TAGS};
use super::inline::add_inline;
use super::relocate::{materialize, relocate, ListKind, PreviousRun};
use super::{DefaultVisitor, RenderOptions, RenderResult, RenderStats, RunVisitor, VisitorAction};

/// Render runs into a fresh tree with default options.
pub fn render_runs(runs: &RunSequence) -> HtmlTree {
    NoteRenderer::new(RenderOptions::default()).render(runs)
}

/// Render runs to an HTML fragment.
pub fn to_html(runs: &RunSequence, options: &RenderOptions) -> Result<String> {
    let mut renderer = NoteRenderer::new(options.clone());
    renderer.render(runs).to_html()
}

/// Render a note to an HTML fragment with statistics.
pub fn to_html_with_stats(note: &Note, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let mut renderer = NoteRenderer::new(options);
    let content = renderer.render(&note.runs).to_html()?;
    Ok(RenderResult::new(
        content,
        note.metadata.clone(),
        renderer.into_stats(),
    ))
}

/// Builds the output tree for a run sequence.
///
/// One forward pass over the runs: each run first opens any heading or
/// monospaced block it starts, then positions the cursor among the list
/// containers left by earlier runs, then inserts its text.
pub struct NoteRenderer<V = DefaultVisitor> {
    options: RenderOptions,
    stats: RenderStats,
    visitor: V,
}

impl NoteRenderer<DefaultVisitor> {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
            visitor: DefaultVisitor,
        }
    }
}

impl<V: RunVisitor> NoteRenderer<V> {
    /// Replace the visitor consulted for every run.
    pub fn with_visitor<W: RunVisitor>(self, visitor: W) -> NoteRenderer<W> {
        NoteRenderer {
            options: self.options,
            stats: self.stats,
            visitor,
        }
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Consume the renderer and return its statistics.
    pub fn into_stats(self) -> RenderStats {
        self.stats
    }

    /// Render runs into a fresh tree.
    pub fn render(&mut self, runs: &RunSequence) -> HtmlTree {
        let mut tree = HtmlTree::new();
        let root = tree.root();
        self.render_into(runs, &mut tree, root);
        tree
    }

    /// Render runs beneath `root`, which should start out empty.
    pub fn render_into(&mut self, runs: &RunSequence, tree: &mut HtmlTree, root: NodeId) {
        let merged;
        let runs = if self.options.merge_adjacent_runs {
            merged = runs.merge_adjacent();
            &merged
        } else {
            runs
        };

        let mut previous_tag_open = false;
        for (index, run) in runs.iter().enumerate() {
            let previous = runs.previous(index).map(|run| PreviousRun {
                run,
                tag_open: previous_tag_open,
            });
            previous_tag_open = self.render_run(tree, root, run, previous);
        }

        log::debug!(
            "Rendered {} runs into {} nodes",
            runs.len(),
            tree.node_count()
        );
    }

    /// Render one run. Returns whether it left its item open for the next run.
    fn render_run(
        &mut self,
        tree: &mut HtmlTree,
        root: NodeId,
        run: &Run,
        previous: Option<PreviousRun<'_>>,
    ) -> bool {
        if let Some(ref style) = run.paragraph_style {
            if style.indent_out_of_range() {
                log::warn!(
                    "Clamping indent amount {} to {}",
                    style.indent_amount,
                    style.indent()
                );
            }
        }

        let tag_open = !run.ends_paragraph();
        let text = self.run_text(run);
        let mut builder = TreeBuilder::new(tree, root);

        self.open_block(&mut builder, run, previous.map(|p| p.run));

        if let Some(kind) = ListKind::for_run(run) {
            let relocation = relocate(&mut builder, run, previous);
            log::debug!(
                "Run at indent {} ({:?}) relocated: {:?}",
                run.indent(),
                run.style_type(),
                relocation
            );
            let opened = materialize(&mut builder, kind, run.indent());
            if self.options.collect_stats {
                self.stats.add_lists(opened);
            }
        }

        if builder.active_is(LIST_TAGS) {
            self.insert_list_text(&mut builder, run, &text);
        } else {
            self.insert_text(&mut builder, run, &text);
        }

        if self.options.collect_stats {
            self.stats.add_run();
            if run.link.as_deref().is_some_and(|link| !link.is_empty()) {
                self.stats.add_link();
            }
            if run.attachment.is_some() {
                self.stats.add_attachment();
            }
        }

        tag_open
    }

    fn run_text<'r>(&mut self, run: &'r Run) -> Cow<'r, str> {
        let text = match self.visitor.visit_run(run) {
            VisitorAction::Continue => Cow::Borrowed(run.text.as_str()),
            VisitorAction::Replace(text) => Cow::Owned(text),
            VisitorAction::Skip => return Cow::Borrowed(""),
        };

        if self.options.normalize_unicode {
            Cow::Owned(text.nfc().collect())
        } else {
            text
        }
    }

    /// Open a heading or monospaced block, or rejoin the one the previous run opened.
    fn open_block(&mut self, builder: &mut TreeBuilder<'_>, run: &Run, previous: Option<&Run>) {
        let Some(tag) = run.style_type().block_tag() else {
            return;
        };

        if !run.same_style_type(previous) {
            builder.open_plain(tag);
            if self.options.collect_stats {
                self.stats.add_block(run.style_type());
            }
            return;
        }

        let tree = builder.tree();
        let block = tree
            .last_element_child(builder.root())
            .filter(|node| tree.name(*node) == Some(tag));
        if let Some(block) = block {
            builder.move_to(block);
        }
    }

    /// Insert text at a list container: one `<li>` per line.
    fn insert_list_text(&mut self, builder: &mut TreeBuilder<'_>, run: &Run, text: &str) {
        let checked = if run.is_checkbox() {
            Some(
                run.paragraph_style
                    .as_ref()
                    .and_then(|style| style.checklist.as_ref())
                    .is_some_and(|checklist| checklist.done),
            )
        } else {
            None
        };

        let segments = split_keeping(text, &['\n']);
        let last = segments.len().saturating_sub(1);
        for (index, segment) in segments.into_iter().enumerate() {
            if segment == "\n" {
                if index != last && builder.active_is(&["li"]) {
                    builder.close();
                }
                continue;
            }

            if !builder.active_is(&["li"]) {
                match checked {
                    Some(done) => {
                        let class = if done { "checked" } else { "unchecked" };
                        builder.open("li", [("class", class)]);
                    }
                    None => {
                        builder.open_plain("li");
                    }
                }
                if self.options.collect_stats {
                    self.stats.add_list_item(checked);
                }
            }
            self.insert_text(builder, run, segment);
        }
    }

    /// Insert text outside a list, turning line breaks into markup.
    fn insert_text(&mut self, builder: &mut TreeBuilder<'_>, run: &Run, text: &str) {
        for segment in split_keeping(text, &[LINE_SEPARATOR, '\n']) {
            if segment.starts_with(LINE_SEPARATOR) {
                builder.insert_empty("br");
            } else if segment == "\n" {
                if builder.active_is(&["pre"]) {
                    add_inline(builder, run, "\n");
                } else if !builder.active_is(HEADING_TAGS) {
                    builder.insert_empty("br");
                }
            } else {
                add_inline(builder, run, segment);
            }
        }
    }
}

/// Split `text` at any of `breaks`, keeping each break as its own segment.
///
/// Empty segments are never produced.
fn split_keeping<'t>(text: &'t str, breaks: &[char]) -> Vec<&'t str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if breaks.contains(&c) {
            if start < index {
                segments.push(&text[start..index]);
            }
            let end = index + c.len_utf8();
            segments.push(&text[index..end]);
            start = end;
        }
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}
