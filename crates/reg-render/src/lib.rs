//! # reg-render
//!
//! Regenerates the registry document from validated collections.
//!
//! Only the text strictly between `<!-- BEGIN:NAME -->` and `<!-- END:NAME -->`
//! markers is replaced; everything else in the document is preserved byte for
//! byte. Rendering is deterministic, so running it twice on unchanged
//! registries yields identical text.

pub mod error;
pub mod markers;
pub mod renderer;
pub mod sections;

pub use error::RenderError;
pub use renderer::{RenderOutcome, render, render_file};
pub use sections::Section;
