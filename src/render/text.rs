//! Plain text rendering of note bodies.

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::RunSequence;

use super::RenderOptions;

/// Convert runs to plain text.
///
/// Soft line breaks become newlines and attachment placeholders are dropped.
pub fn to_text(runs: &RunSequence, options: &RenderOptions) -> Result<String> {
    let output = runs.plain_text();

    let output = if options.normalize_unicode {
        output.nfc().collect::<String>()
    } else {
        output
    };

    Ok(output.trim().to_string())
}
