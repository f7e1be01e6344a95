//! Attributed text runs.

use serde::{Deserialize, Serialize};

use super::{ParagraphStyle, StyleType};

/// Object replacement character left in the text where an attachment sits.
pub const ATTACHMENT_PLACEHOLDER: char = '\u{FFFC}';

/// Unicode line separator, used by notes for soft line breaks.
pub const LINE_SEPARATOR: char = '\u{2028}';

/// One contiguous span of text sharing identical formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The literal text of the span
    pub text: String,

    /// Block-level styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,

    /// Font face and size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    /// Bold / italic
    #[serde(default)]
    pub font_weight: FontWeight,

    /// Underlined text
    #[serde(default)]
    pub underlined: bool,

    /// Struck-through text
    #[serde(default)]
    pub strikethrough: bool,

    /// Vertical offset
    #[serde(default)]
    pub superscript: Superscript,

    /// Hyperlink target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Foreground colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Embedded object reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentRef>,
}

impl Run {
    /// Create an unstyled run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a run with a paragraph style.
    pub fn styled(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self {
            text: text.into(),
            paragraph_style: Some(style),
            ..Default::default()
        }
    }

    /// Set the paragraph style.
    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = Some(style);
        self
    }

    /// Set the font weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the hyperlink.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the attachment reference.
    pub fn with_attachment(mut self, attachment: AttachmentRef) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Style type, or [`StyleType::None`] without a paragraph style.
    pub fn style_type(&self) -> StyleType {
        self.paragraph_style
            .as_ref()
            .map(|s| s.style_type)
            .unwrap_or_default()
    }

    /// Indent depth, zero without a paragraph style.
    pub fn indent(&self) -> usize {
        self.paragraph_style.as_ref().map_or(0, |s| s.indent())
    }

    /// True iff a paragraph style is present with a style type other than `None`.
    pub fn has_style_type(&self) -> bool {
        self.style_type() != StyleType::None
    }

    /// Checklist item.
    pub fn is_checkbox(&self) -> bool {
        self.style_type() == StyleType::Checkbox
    }

    /// Numbered list item.
    pub fn is_numbered_list(&self) -> bool {
        self.style_type() == StyleType::NumberedList
    }

    /// Bulleted list item.
    pub fn is_dotted_list(&self) -> bool {
        self.style_type() == StyleType::DottedList
    }

    /// Dashed list item.
    pub fn is_dashed_list(&self) -> bool {
        self.style_type() == StyleType::DashedList
    }

    /// Any of the four list styles.
    pub fn is_any_list(&self) -> bool {
        self.is_numbered_list() || self.is_dotted_list() || self.is_dashed_list() || self.is_checkbox()
    }

    /// Whether this run continues the block of `other`.
    ///
    /// Runs without a style type match each other; a styled and an unstyled
    /// run never match. Styled runs must share indent, checklist (when both
    /// are checkboxes) and style type.
    pub fn same_style_type(&self, other: Option<&Run>) -> bool {
        let Some(other) = other else {
            return false;
        };

        match (self.has_style_type(), other.has_style_type()) {
            (false, false) => return true,
            (true, true) => {}
            _ => return false,
        }

        if self.indent() != other.indent() {
            return false;
        }

        if self.is_checkbox() && other.is_checkbox() && self.checklist_uuid() != other.checklist_uuid() {
            return false;
        }

        self.style_type() == other.style_type()
    }

    /// Whether `other` has the same font weight.
    pub fn same_font_weight(&self, other: Option<&Run>) -> bool {
        other.is_some_and(|other| other.font_weight == self.font_weight)
    }

    /// Whether every formatting attribute matches, so the two runs could be one.
    ///
    /// Runs carrying an attachment never qualify.
    pub fn same_formatting(&self, other: &Run) -> bool {
        self.attachment.is_none()
            && self.paragraph_style == other.paragraph_style
            && self.font == other.font
            && self.font_weight == other.font_weight
            && self.underlined == other.underlined
            && self.strikethrough == other.strikethrough
            && self.superscript == other.superscript
            && self.link == other.link
            && self.color == other.color
            && self.attachment == other.attachment
    }

    /// Whether the run's text ends a paragraph.
    pub fn ends_paragraph(&self) -> bool {
        self.text.ends_with('\n')
    }

    fn checklist_uuid(&self) -> Option<&str> {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.checklist.as_ref())
            .map(|c| c.uuid.as_str())
    }
}

/// Font face and size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f32>,
}

impl Font {
    /// Create a font with a family name and size.
    pub fn new(name: impl Into<String>, point_size: f32) -> Self {
        Self {
            name: Some(name.into()),
            point_size: Some(point_size),
        }
    }
}

/// Bold / italic combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular
    #[default]
    None,
    /// Bold
    Bold,
    /// Italic
    Italic,
    /// Bold and italic
    BoldItalic,
}

impl FontWeight {
    /// Map the integer encoding used by the notes database.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => FontWeight::Bold,
            2 => FontWeight::Italic,
            3 => FontWeight::BoldItalic,
            _ => FontWeight::None,
        }
    }

    /// Whether the weight includes bold.
    pub fn is_bold(self) -> bool {
        matches!(self, FontWeight::Bold | FontWeight::BoldItalic)
    }

    /// Whether the weight includes italic.
    pub fn is_italic(self) -> bool {
        matches!(self, FontWeight::Italic | FontWeight::BoldItalic)
    }
}

/// Superscript / subscript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Superscript {
    /// Baseline
    #[default]
    None,
    /// Raised
    Super,
    /// Lowered
    Sub,
}

impl Superscript {
    /// Map the source encoding: 1 raised, -1 lowered, anything else baseline.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Superscript::Super,
            -1 => Superscript::Sub,
            _ => Superscript::None,
        }
    }
}

/// RGB colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub red: f32,
    /// Green channel
    pub green: f32,
    /// Blue channel
    pub blue: f32,
}

impl Color {
    /// Create a colour from channel values.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

/// Reference to an embedded object (image, table, drawing...).
///
/// Only its presence matters to the renderer; the fields are carried through
/// for [`crate::render::RunVisitor`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Identifier of the embedded object
    pub identifier: String,

    /// Uniform type identifier of the object, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_uti: Option<String>,
}

impl AttachmentRef {
    /// Create an attachment reference.
    pub fn new(identifier: impl Into<String>, type_uti: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            type_uti,
        }
    }
}
