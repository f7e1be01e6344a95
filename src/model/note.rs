//! Note-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RunSequence;

/// A recovered note: its metadata and its body runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Note metadata
    #[serde(default)]
    pub metadata: NoteMetadata,

    /// Body runs in document order
    pub runs: RunSequence,
}

impl Note {
    /// Create a note from its runs.
    pub fn new(runs: impl Into<RunSequence>) -> Self {
        Self {
            metadata: NoteMetadata::default(),
            runs: runs.into(),
        }
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: NoteMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Title from the metadata, falling back to the first line of the body.
    pub fn display_title(&self) -> String {
        if let Some(ref title) = self.metadata.title {
            return title.clone();
        }

        self.runs
            .plain_text()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
            .to_string()
    }
}

/// Note metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Note title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Containing folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Owning account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl NoteMetadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Whether anything besides the title is set.
    pub fn has_details(&self) -> bool {
        self.folder.is_some()
            || self.account.is_some()
            || self.created.is_some()
            || self.modified.is_some()
    }
}
