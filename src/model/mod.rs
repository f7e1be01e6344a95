//! Input model: the attributed runs a note body decodes into.
//!
//! These types are the contract with the decoding collaborator. They carry no
//! rendering state; everything mutable during rendering lives in
//! [`crate::render`].

mod note;
mod run;
mod sequence;
mod style;

pub use note::{Note, NoteMetadata};
pub use run::{
    AttachmentRef, Color, Font, FontWeight, Run, Superscript, ATTACHMENT_PLACEHOLDER,
    LINE_SEPARATOR,
};
pub use sequence::RunSequence;
pub use style::{Alignment, Checklist, ParagraphStyle, StyleType, MAX_INDENT};
