//! Rendering result with metadata and statistics.

use crate::model::{NoteMetadata, StyleType};
use serde::{Deserialize, Serialize};

/// Result of rendering a note, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Note metadata (copied from the source note)
    pub metadata: NoteMetadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: NoteMetadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            metadata: NoteMetadata::default(),
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Runs processed
    pub run_count: u32,

    /// Title, heading and subheading blocks opened
    pub heading_count: u32,

    /// Monospaced blocks opened
    pub monospaced_count: u32,

    /// List containers (`ol`/`ul`) opened
    pub list_count: u32,

    /// List items opened for text
    pub list_item_count: u32,

    /// Ticked checklist items
    pub checked_count: u32,

    /// Unticked checklist items
    pub unchecked_count: u32,

    /// Runs rendered with a hyperlink
    pub link_count: u32,

    /// Runs referencing an embedded object
    pub attachment_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed run.
    pub fn add_run(&mut self) {
        self.run_count += 1;
    }

    /// Record an opened heading or monospaced block.
    pub fn add_block(&mut self, style_type: StyleType) {
        match style_type {
            StyleType::Monospaced => self.monospaced_count += 1,
            _ => self.heading_count += 1,
        }
    }

    /// Record opened list containers.
    pub fn add_lists(&mut self, count: usize) {
        self.list_count += count as u32;
    }

    /// Record an opened list item; `checked` is set for checklist items.
    pub fn add_list_item(&mut self, checked: Option<bool>) {
        self.list_item_count += 1;
        match checked {
            Some(true) => self.checked_count += 1,
            Some(false) => self.unchecked_count += 1,
            None => {}
        }
    }

    /// Record a hyperlinked run.
    pub fn add_link(&mut self) {
        self.link_count += 1;
    }

    /// Record an attachment run.
    pub fn add_attachment(&mut self) {
        self.attachment_count += 1;
    }

    /// Combine statistics from another note.
    pub fn merge(&mut self, other: &RenderStats) {
        self.run_count += other.run_count;
        self.heading_count += other.heading_count;
        self.monospaced_count += other.monospaced_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.checked_count += other.checked_count;
        self.unchecked_count += other.unchecked_count;
        self.link_count += other.link_count;
        self.attachment_count += other.attachment_count;
    }
}
