//! # unnotes
//!
//! Rich-text reconstruction for recovered notes.
//!
//! A note body arrives as a flat sequence of attributed text runs: each run
//! carries its text plus paragraph style, indent, checklist state, font,
//! weight, underline, strikethrough, superscript, link and colour. This
//! library rebuilds the nested markup those attributes describe: headings,
//! monospaced blocks, ordered/unordered lists and checklists nested to
//! arbitrary depth, and inline formatting.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unnotes::{load_note, render};
//!
//! fn main() -> unnotes::Result<()> {
//!     // Load a decoded note (a JSON run list or note object)
//!     let note = load_note("note.json")?;
//!
//!     // Convert to an HTML fragment
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&note.runs, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **List reconstruction**: nested `ol`/`ul` recovered from per-run indents
//! - **Checklists**: per-item checked/unchecked state
//! - **Inline formatting**: bold, italic, underline, strikethrough, super/subscript,
//!   alignment, font, colour and links
//! - **Multiple outputs**: HTML fragment, full HTML document, plain text, JSON tree
//! - **Parallel processing**: Uses Rayon for batches of notes

pub mod error;
pub mod model;
pub mod render;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, AttachmentRef, Checklist, Color, Font, FontWeight, Note, NoteMetadata,
    ParagraphStyle, Run, RunSequence, StyleType, Superscript,
};
pub use render::{
    DocumentOptions, JsonFormat, NoteRenderer, RenderOptions, RenderResult, RenderStats,
    RunVisitor, VisitorAction,
};
pub use tree::{HtmlTree, NodeId};

use std::io::Read;
use std::path::Path;

/// Load a note from a JSON file.
///
/// The file holds either a bare array of runs or a note object with
/// `metadata` and `runs`.
///
/// # Example
///
/// ```no_run
/// use unnotes::load_note;
///
/// let note = load_note("note.json").unwrap();
/// println!("Runs: {}", note.runs.len());
/// ```
pub fn load_note<P: AsRef<Path>>(path: P) -> Result<Note> {
    let path = path.as_ref();
    log::debug!("Loading note from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_note_json(&json)
}

/// Load only the runs of a note from a JSON file.
pub fn load_runs<P: AsRef<Path>>(path: P) -> Result<RunSequence> {
    Ok(load_note(path)?.runs)
}

/// Parse a note from JSON text.
///
/// # Example
///
/// ```
/// use unnotes::parse_note_json;
///
/// let note = parse_note_json(r#"[{"text": "Hello\n"}]"#).unwrap();
/// assert_eq!(note.runs.len(), 1);
/// ```
pub fn parse_note_json(json: &str) -> Result<Note> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    note_from_value(value)
}

/// Parse a note from a reader.
pub fn parse_note_reader<R: Read>(reader: R) -> Result<Note> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    note_from_value(value)
}

fn note_from_value(value: serde_json::Value) -> Result<Note> {
    use serde_json::Value;

    match value {
        Value::Array(_) => Ok(Note::new(serde_json::from_value::<RunSequence>(value)?)),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(Error::InvalidRuns(format!(
            "expected a run array or a note object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extract plain text from a note file.
///
/// # Example
///
/// ```no_run
/// use unnotes::extract_text;
///
/// let text = extract_text("note.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let note = load_note(path)?;
    Ok(note.runs.plain_text())
}

/// Convert a note file to an HTML fragment.
///
/// # Example
///
/// ```no_run
/// use unnotes::to_html;
///
/// let html = to_html("note.json").unwrap();
/// std::fs::write("note.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default())
}

/// Convert a note file to an HTML fragment with custom options.
///
/// # Example
///
/// ```no_run
/// use unnotes::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_normalize_unicode(true)
///     .with_merge_adjacent_runs(true);
/// let html = to_html_with_options("note.json", &options).unwrap();
/// ```
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let note = load_note(path)?;
    render::to_html(&note.runs, options)
}

/// Convert a note file to a standalone HTML document.
pub fn to_html_document<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let note = load_note(path)?;
    render::to_html_document(&note, options)
}

/// Convert a note file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let note = load_note(path)?;
    render::to_text(&note.runs, options)
}

/// Convert a note file to the JSON form of its rendered tree.
///
/// # Example
///
/// ```no_run
/// use unnotes::{to_json, JsonFormat};
///
/// let json = to_json("note.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("tree.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let note = load_note(path)?;
    let tree = render::render_runs(&note.runs);
    render::to_json(&tree, format)
}

/// Builder for loading and converting notes.
///
/// # Example
///
/// ```no_run
/// use unnotes::Unnotes;
///
/// let html = Unnotes::new()
///     .normalize_unicode()
///     .merge_runs()
///     .load("note.json")?
///     .to_html_document()?;
/// # Ok::<(), unnotes::Error>(())
/// ```
pub struct Unnotes {
    render_options: RenderOptions,
}

impl Unnotes {
    /// Create a new Unnotes builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// NFC-normalize run text.
    pub fn normalize_unicode(mut self) -> Self {
        self.render_options = self.render_options.with_normalize_unicode(true);
        self
    }

    /// Merge adjacent runs with identical formatting.
    pub fn merge_runs(mut self) -> Self {
        self.render_options = self.render_options.with_merge_adjacent_runs(true);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.render_options = self.render_options.sequential();
        self
    }

    /// Set document wrapper options.
    pub fn with_document(mut self, document: DocumentOptions) -> Self {
        self.render_options = self.render_options.with_document(document);
        self
    }

    /// Load a note file and return a result wrapper.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<UnnotesResult> {
        let note = load_note(path)?;
        Ok(UnnotesResult {
            note,
            render_options: self.render_options,
        })
    }

    /// Parse a note from JSON text.
    pub fn parse_str(self, json: &str) -> Result<UnnotesResult> {
        let note = parse_note_json(json)?;
        Ok(UnnotesResult {
            note,
            render_options: self.render_options,
        })
    }

    /// Render many note files, one result per file in input order.
    pub fn render_files<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<Result<String>> {
        let mut results: Vec<Option<Result<String>>> = Vec::with_capacity(paths.len());
        let mut notes = Vec::with_capacity(paths.len());

        for path in paths {
            match load_note(path) {
                Ok(note) => {
                    notes.push(note);
                    results.push(None);
                }
                Err(e) => results.push(Some(Err(e))),
            }
        }

        let mut rendered = render::render_notes(&notes, &self.render_options).into_iter();
        results
            .into_iter()
            .map(|slot| match slot {
                Some(err) => err,
                None => rendered
                    .next()
                    .unwrap_or_else(|| Err(Error::Other("missing batch result".to_string()))),
            })
            .collect()
    }
}

impl Default for Unnotes {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded note together with the options to render it with.
pub struct UnnotesResult {
    /// The loaded note
    pub note: Note,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnnotesResult {
    /// Convert to an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.note.runs, &self.render_options)
    }

    /// Convert to a standalone HTML document.
    pub fn to_html_document(&self) -> Result<String> {
        render::to_html_document(&self.note, &self.render_options)
    }

    /// Convert to an HTML fragment with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.note, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.note.runs, &self.render_options)
    }

    /// Convert the rendered tree to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let tree = NoteRenderer::new(self.render_options.clone()).render(&self.note.runs);
        render::to_json(&tree, format)
    }

    /// Get plain text without normalization.
    pub fn plain_text(&self) -> String {
        self.note.runs.plain_text()
    }

    /// Get the note.
    pub fn note(&self) -> &Note {
        &self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CHECKLIST_NOTE: &str = r#"{
        "metadata": {"title": "Groceries", "folder": "Home"},
        "runs": [
            {"text": "Groceries\n", "paragraph_style": {"style_type": "title"}},
            {"text": "Milk\n", "paragraph_style": {"style_type": "checkbox",
                "checklist": {"uuid": "A", "done": true}}},
            {"text": "Eggs\n", "paragraph_style": {"style_type": "checkbox",
                "checklist": {"uuid": "B", "done": false}}}
        ]
    }"#;

    #[test]
    fn test_parse_bare_run_array() {
        let note = parse_note_json(r#"[{"text": "a"}, {"text": "b\n"}]"#).unwrap();
        assert_eq!(note.runs.len(), 2);
        assert!(note.metadata.title.is_none());
    }

    #[test]
    fn test_parse_note_object() {
        let note = parse_note_json(CHECKLIST_NOTE).unwrap();
        assert_eq!(note.metadata.title.as_deref(), Some("Groceries"));
        assert_eq!(note.runs.len(), 3);
        assert!(note.runs.get(1).unwrap().is_checkbox());
    }

    #[test]
    fn test_parse_rejects_scalars() {
        let result = parse_note_json("42");
        assert!(matches!(result, Err(Error::InvalidRuns(_))));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse_note_json("[{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_reader() {
        let note = parse_note_reader(CHECKLIST_NOTE.as_bytes()).unwrap();
        assert_eq!(note.display_title(), "Groceries");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(load_note("/nonexistent/note.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_file_conversions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CHECKLIST_NOTE.as_bytes()).unwrap();

        let html = to_html(file.path()).unwrap();
        assert_eq!(
            html,
            "<h1>Groceries</h1>\
             <ul class=\"checklist\" data-indent-amount=\"0\">\
             <li class=\"checked\">Milk</li><li class=\"unchecked\">Eggs</li></ul>"
        );

        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "Groceries\nMilk\nEggs\n");

        let json = to_json(file.path(), JsonFormat::Compact).unwrap();
        assert!(json.starts_with("{\"children\":[{\"tag\":\"h1\""));

        assert_eq!(load_runs(file.path()).unwrap().len(), 3);
    }

    #[test]
    fn test_unnotes_builder() {
        let unnotes = Unnotes::new().normalize_unicode().merge_runs().sequential();
        assert!(unnotes.render_options.normalize_unicode);
        assert!(unnotes.render_options.merge_adjacent_runs);
        assert!(!unnotes.render_options.parallel);
    }

    #[test]
    fn test_unnotes_result() {
        let result = Unnotes::new().parse_str(CHECKLIST_NOTE).unwrap();
        let rendered = result.to_html_with_stats().unwrap();
        assert_eq!(rendered.stats.checked_count, 1);
        assert_eq!(rendered.stats.unchecked_count, 1);
        assert_eq!(rendered.stats.heading_count, 1);
        assert_eq!(rendered.metadata.folder.as_deref(), Some("Home"));

        let document = result.to_html_document().unwrap();
        assert!(document.contains("<b>Folder:</b> Home"));
        assert_eq!(result.to_text().unwrap(), "Groceries\nMilk\nEggs");
    }

    #[test]
    fn test_render_files_keeps_order_and_errors() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(br#"[{"text": "hi"}]"#).unwrap();
        let missing = std::path::PathBuf::from("/nonexistent/note.json");

        let paths = vec![good.path().to_path_buf(), missing, good.path().to_path_buf()];
        let results = Unnotes::new().render_files(&paths);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), "hi");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap(), "hi");
    }
}
