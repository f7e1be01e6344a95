//! Rendering options and configuration.

/// Options for rendering a note.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// NFC-normalize run text before rendering
    pub normalize_unicode: bool,

    /// Coalesce adjacent runs with identical formatting first
    pub merge_adjacent_runs: bool,

    /// Render batches of notes on the rayon thread pool
    pub parallel: bool,

    /// Collect rendering statistics
    pub collect_stats: bool,

    /// Full-document wrapper settings
    pub document: DocumentOptions,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable run merging.
    pub fn with_merge_adjacent_runs(mut self, merge: bool) -> Self {
        self.merge_adjacent_runs = merge;
        self
    }

    /// Enable or disable parallel batch rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set document wrapper options.
    pub fn with_document(mut self, document: DocumentOptions) -> Self {
        self.document = document;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: false,
            merge_adjacent_runs: false,
            parallel: true,
            collect_stats: false,
            document: DocumentOptions::default(),
        }
    }
}

/// Settings for the full HTML document around a rendered note.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Embed the stylesheet for list and checklist classes
    pub include_stylesheet: bool,

    /// Replacement for the built-in stylesheet
    pub stylesheet: Option<String>,

    /// Show folder, account and dates above the note
    pub include_metadata: bool,

    /// Document title; defaults to the note's title
    pub title: Option<String>,
}

impl DocumentOptions {
    /// Create new document options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the stylesheet.
    pub fn with_stylesheet(mut self, include: bool) -> Self {
        self.include_stylesheet = include;
        self
    }

    /// Use a custom stylesheet.
    pub fn with_custom_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.include_stylesheet = true;
        self.stylesheet = Some(css.into());
        self
    }

    /// Enable or disable the metadata header.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Override the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            include_stylesheet: true,
            stylesheet: None,
            include_metadata: true,
            title: None,
        }
    }
}
