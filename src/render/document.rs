//! Full HTML documents around a rendered note.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;
use crate::model::{Note, NoteMetadata};
use crate::tree::HtmlWriter;

use super::{NoteRenderer, RenderOptions};

/// Built-in stylesheet for the classes the renderer emits.
pub const STYLESHEET: &str = "\
body { font-family: -apple-system, Helvetica, sans-serif; margin: 2em; }
.note-metadata { color: #666; font-size: 0.9em; margin-bottom: 1em; }
ul.dotted { list-style-type: disc; }
ul.dashed { list-style-type: none; }
ul.dashed > li::before { content: \"- \"; }
ul.checklist { list-style-type: none; padding-left: 1em; }
ul.checklist li.checked::before { content: \"\\2611  \"; }
ul.checklist li.unchecked::before { content: \"\\2610  \"; }
ul.none { list-style-type: none; }
";

/// Render a note as a standalone HTML document.
pub fn to_html_document(note: &Note, options: &RenderOptions) -> Result<String> {
    let document = &options.document;
    let title = document
        .title
        .clone()
        .unwrap_or_else(|| note.display_title());

    let mut writer = HtmlWriter::new();
    writer.raw("<!DOCTYPE html>\n");
    writer.start_tag("html")?;
    writer.start_tag("head")?;
    writer.start_tag("meta")?;
    writer.attribute("charset", "utf-8")?;
    writer.start_tag("title")?;
    writer.text(&title);
    writer.end_tag("title");

    if document.include_stylesheet {
        writer.start_tag("style")?;
        writer.raw(document.stylesheet.as_deref().unwrap_or(STYLESHEET));
        writer.end_tag("style");
    }
    writer.end_tag("head");

    writer.start_tag("body")?;
    if document.include_metadata && note.metadata.has_details() {
        write_metadata(&mut writer, &note.metadata)?;
    }

    let tree = NoteRenderer::new(options.clone()).render(&note.runs);
    writer.start_tag("div")?;
    writer.attribute("class", "note-content")?;
    writer.write_node(&tree, tree.root())?;
    writer.end_tag("div");

    writer.end_tag("body");
    writer.end_tag("html");
    Ok(writer.into_string())
}

fn write_metadata(writer: &mut HtmlWriter, metadata: &NoteMetadata) -> Result<()> {
    writer.start_tag("div")?;
    writer.attribute("class", "note-metadata")?;

    let fields = [
        ("Folder", metadata.folder.clone()),
        ("Account", metadata.account.clone()),
        ("Created", metadata.created.as_ref().map(timestamp)),
        ("Modified", metadata.modified.as_ref().map(timestamp)),
    ];

    for (label, value) in fields {
        let Some(value) = value else {
            continue;
        };
        writer.start_tag("div")?;
        writer.start_tag("b")?;
        writer.text(label);
        writer.text(":");
        writer.end_tag("b");
        writer.text(" ");
        writer.text(&value);
        writer.end_tag("div");
    }

    writer.end_tag("div");
    Ok(())
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
