//! Render error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the registry document.
///
/// Missing markers are not errors; they are reported as warnings.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
