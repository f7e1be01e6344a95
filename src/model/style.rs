//! Paragraph-level style types.

use serde::{Deserialize, Serialize};

/// Deepest indent level the renderer materializes; larger amounts are clamped.
pub const MAX_INDENT: usize = 64;

/// Block-level style of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleType {
    /// Plain body text
    #[default]
    None,
    /// Note title
    Title,
    /// Heading
    Heading,
    /// Subheading
    Subheading,
    /// Monospaced (code) block
    Monospaced,
    /// Numbered list item
    NumberedList,
    /// Bulleted list item
    DottedList,
    /// Dashed list item
    DashedList,
    /// Checklist item
    Checkbox,
}

impl StyleType {
    /// Map the integer encoding used by the notes database.
    ///
    /// Unknown values fall back to [`StyleType::None`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => StyleType::Title,
            1 => StyleType::Heading,
            2 => StyleType::Subheading,
            4 => StyleType::Monospaced,
            100 => StyleType::DottedList,
            101 => StyleType::DashedList,
            102 => StyleType::NumberedList,
            103 => StyleType::Checkbox,
            _ => StyleType::None,
        }
    }

    /// Whether this is one of the four list styles.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            StyleType::NumberedList
                | StyleType::DottedList
                | StyleType::DashedList
                | StyleType::Checkbox
        )
    }

    /// Block tag opened when a paragraph of this style starts, if any.
    pub fn block_tag(self) -> Option<&'static str> {
        match self {
            StyleType::Title => Some("h1"),
            StyleType::Heading => Some("h2"),
            StyleType::Subheading => Some("h3"),
            StyleType::Monospaced => Some("pre"),
            _ => None,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Natural (left) alignment
    #[default]
    None,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}

impl Alignment {
    /// Map the integer encoding used by the notes database.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Alignment::Center,
            2 => Alignment::Right,
            3 => Alignment::Justify,
            _ => Alignment::None,
        }
    }

    /// CSS `text-align` value, or `None` for natural alignment.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::Justify => Some("justify"),
        }
    }
}

/// Checklist membership of a checkbox paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checklist {
    /// Identifier shared by every item of one checklist
    pub uuid: String,

    /// Whether the item is ticked
    #[serde(default)]
    pub done: bool,
}

impl Checklist {
    /// Create a checklist marker.
    pub fn new(uuid: impl Into<String>, done: bool) -> Self {
        Self {
            uuid: uuid.into(),
            done,
        }
    }
}

/// Paragraph styling attached to a run.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Block style
    #[serde(default)]
    pub style_type: StyleType,

    /// Text alignment
    #[serde(default)]
    pub alignment: Alignment,

    /// Nesting depth as encoded by the source. Read it through [`ParagraphStyle::indent`].
    #[serde(default)]
    pub indent_amount: i64,

    /// Checklist linkage for checkbox paragraphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Checklist>,
}

impl ParagraphStyle {
    /// Create a style of the given type with no indent.
    pub fn new(style_type: StyleType) -> Self {
        Self {
            style_type,
            ..Default::default()
        }
    }

    /// Set the indent amount.
    pub fn with_indent(mut self, indent_amount: i64) -> Self {
        self.indent_amount = indent_amount;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Attach a checklist marker.
    pub fn with_checklist(mut self, uuid: impl Into<String>, done: bool) -> Self {
        self.checklist = Some(Checklist::new(uuid, done));
        self
    }

    /// Indent depth, clamped to `0..=MAX_INDENT`.
    pub fn indent(&self) -> usize {
        self.indent_amount.clamp(0, MAX_INDENT as i64) as usize
    }

    /// Whether `indent_amount` lies outside the range [`indent`](Self::indent) returns.
    pub fn indent_out_of_range(&self) -> bool {
        self.indent_amount < 0 || self.indent_amount > MAX_INDENT as i64
    }
}

impl PartialEq for ParagraphStyle {
    fn eq(&self, other: &Self) -> bool {
        let same_checklist = match (&self.checklist, &other.checklist) {
            (Some(a), Some(b)) => a.uuid == b.uuid,
            (None, None) => true,
            _ => false,
        };

        self.style_type == other.style_type
            && self.alignment == other.alignment
            && self.indent() == other.indent()
            && same_checklist
    }
}
