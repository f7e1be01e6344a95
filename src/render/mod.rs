//! Rendering module: attributed runs to markup.
//!
//! [`NoteRenderer`] builds an [`HtmlTree`](crate::tree::HtmlTree) in a single
//! forward pass over a [`RunSequence`](crate::model::RunSequence). The other
//! entry points wrap it for fragments, full documents, plain text, JSON and
//! batches.

mod batch;
mod builder;
mod document;
mod html;
mod inline;
mod json;
mod options;
pub mod relocate;
mod result;
mod text;
pub mod visitor;

pub use batch::{render_documents, render_notes};
pub use builder::TreeBuilder;
pub use document::{to_html_document, STYLESHEET};
pub use html::{render_runs, to_html, to_html_with_stats, NoteRenderer};
pub use inline::{add_inline, color_hex, span_style};
pub use json::{to_json, JsonFormat};
pub use options::{DocumentOptions, RenderOptions};
pub use relocate::{ListKind, Relocation, INDENT_MARKER};
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
pub use visitor::{DefaultVisitor, RunVisitor, SkipAttachmentsVisitor, VisitorAction};
