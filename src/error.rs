//! Error types for unnotes library.

use std::io;
use thiserror::Error;

/// Result type alias for unnotes operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors at the edges of the renderer.
///
/// Rendering a run sequence never fails; these come from reading input and
/// writing output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is JSON but neither a run list nor a note.
    #[error("Invalid run sequence: {0}")]
    InvalidRuns(String),

    /// Error while serializing the rendered tree.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
