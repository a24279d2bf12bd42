//! Schema and registry error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from rule compilation, registry file access and schema export.
///
/// Problems with registry *content* are never errors: they are reported as
/// diagnostics. These variants cover what aborts a run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A registry file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern failed to compile.
    #[error("Invalid pattern for {kind}.{field}: {source}")]
    Pattern {
        kind: String,
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A registry file cannot be appended to because its content is not a JSON array.
    #[error("{path} does not hold a JSON array")]
    NotAnArray { path: PathBuf },

    /// A record passed to the entry collector is not a JSON object.
    #[error("Record must be a JSON object")]
    NotAnObject,

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] reg_core::CoreError),
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
