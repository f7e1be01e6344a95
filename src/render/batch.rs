//! Rendering many notes at once.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::Note;

use super::{to_html, to_html_document, RenderOptions};

/// Render each note to an HTML fragment.
///
/// Every note gets its own tree, so notes render independently. Results come
/// back in input order.
pub fn render_notes(notes: &[Note], options: &RenderOptions) -> Vec<Result<String>> {
    log::debug!(
        "Rendering {} notes ({})",
        notes.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if options.parallel {
        notes
            .par_iter()
            .map(|note| to_html(&note.runs, options))
            .collect()
    } else {
        notes.iter().map(|note| to_html(&note.runs, options)).collect()
    }
}

/// Render each note as a standalone HTML document, in input order.
pub fn render_documents(notes: &[Note], options: &RenderOptions) -> Vec<Result<String>> {
    if options.parallel {
        notes
            .par_iter()
            .map(|note| to_html_document(note, options))
            .collect()
    } else {
        notes
            .iter()
            .map(|note| to_html_document(note, options))
            .collect()
    }
}
