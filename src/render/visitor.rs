//! Visitor hooks for customizing how runs are rendered.
//!
//! The renderer asks the visitor about every run before inserting its text.
//! This is the seam an application uses to substitute something for the
//! placeholder character an embedded object leaves in the text.
//!
//! # Example
//!
//! ```
//! use unnotes::model::AttachmentRef;
//! use unnotes::render::{RunVisitor, VisitorAction};
//!
//! struct AttachmentLabels;
//!
//! impl RunVisitor for AttachmentLabels {
//!     fn visit_attachment(&mut self, attachment: &AttachmentRef) -> VisitorAction {
//!         VisitorAction::Replace(format!("[attachment {}]", attachment.identifier))
//!     }
//! }
//! ```

use crate::model::{AttachmentRef, Run};

/// What to do with a run's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Render the run's own text.
    #[default]
    Continue,

    /// Render this text instead, with the run's formatting.
    Replace(String),

    /// Render no text. Block structure (headings, lists) is still produced.
    Skip,
}

impl VisitorAction {
    /// Check if this action drops the run's text.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement text.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement text if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for intercepting runs during rendering.
///
/// All methods have default implementations that return `Continue`.
pub trait RunVisitor {
    /// Called for every run, in document order.
    ///
    /// The default forwards runs that carry an attachment to
    /// [`RunVisitor::visit_attachment`].
    fn visit_run(&mut self, run: &Run) -> VisitorAction {
        match run.attachment {
            Some(ref attachment) => self.visit_attachment(attachment),
            None => VisitorAction::Continue,
        }
    }

    /// Called for runs that reference an embedded object.
    fn visit_attachment(&mut self, _attachment: &AttachmentRef) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Visitor that renders every run as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl RunVisitor for DefaultVisitor {}

/// Visitor that drops the text of attachment runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipAttachmentsVisitor;

impl RunVisitor for SkipAttachmentsVisitor {
    fn visit_attachment(&mut self, _attachment: &AttachmentRef) -> VisitorAction {
        VisitorAction::Skip
    }
}

impl<V: RunVisitor + ?Sized> RunVisitor for &mut V {
    fn visit_run(&mut self, run: &Run) -> VisitorAction {
        (**self).visit_run(run)
    }

    fn visit_attachment(&mut self, attachment: &AttachmentRef) -> VisitorAction {
        (**self).visit_attachment(attachment)
    }
}
