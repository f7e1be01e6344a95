//! Inline formatting of a single run's text.

use crate::model::{Color, Font, Run, Superscript};

use super::builder::{TreeBuilder, HEADING_TAGS};

/// Insert `text` under the cursor wrapped in the run's inline formatting.
///
/// Tags open in a fixed order and are all closed again afterwards, leaving
/// the cursor on the node it started from.
pub fn add_inline(builder: &mut TreeBuilder<'_>, run: &Run, text: &str) {
    let begin_depth = builder.depth();

    // Headings are already bold.
    if run.font_weight.is_bold() && !builder.active_is(HEADING_TAGS) {
        builder.open_plain("b");
    }
    if run.font_weight.is_italic() {
        builder.open_plain("i");
    }

    if run.underlined {
        builder.open_plain("u");
    }

    if run.strikethrough {
        builder.open_plain("s");
    }

    match run.superscript {
        Superscript::Super => {
            builder.open_plain("sup");
        }
        Superscript::Sub => {
            builder.open_plain("sub");
        }
        Superscript::None => {}
    }

    if let Some(align) = run
        .paragraph_style
        .as_ref()
        .and_then(|style| style.alignment.css_value())
    {
        builder.open("div", [("style", format!("text-align: {align}"))]);
    }

    if let Some(style) = span_style(run.font.as_ref(), run.color.as_ref()) {
        builder.open("span", [("style", style)]);
    }

    if let Some(link) = run.link.as_deref().filter(|link| !link.is_empty()) {
        builder.open("a", [("href", link), ("target", "_blank")]);
    }

    builder.insert_text(text);
    builder.close_to_depth(begin_depth);
}

/// CSS declarations for a font and colour, joined with `"; "`.
pub fn span_style(font: Option<&Font>, color: Option<&Color>) -> Option<String> {
    let mut declarations: Vec<String> = Vec::new();

    if let Some(font) = font {
        if let Some(ref name) = font.name {
            declarations.push(format!("font-family: '{}'", name.replace('\'', "\\'")));
        }
        if let Some(size) = font.point_size {
            declarations.push(format!("font-size: {size}px"));
        }
    }

    if let Some(color) = color {
        declarations.push(format!("color: {}", color_hex(color)));
    }

    if declarations.is_empty() {
        None
    } else {
        Some(declarations.join("; "))
    }
}

/// Format a colour as `#RRGGBB` without zero-padding each channel.
///
/// A channel of 5/255 renders as `5`, not `05`.
pub fn color_hex(color: &Color) -> String {
    format!(
        "#{}{}{}",
        channel_hex(color.red),
        channel_hex(color.green),
        channel_hex(color.blue)
    )
}

fn channel_hex(value: f32) -> String {
    let value = if (0.0..=1.0).contains(&value) {
        value
    } else {
        log::warn!("Clamping colour channel {} into [0, 1]", value);
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    };
    format!("{:X}", (value * 255.0).round() as u32)
}
