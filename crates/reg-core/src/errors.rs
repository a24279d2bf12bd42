//! Cross-cutting error types for Registrar.
//!
//! Domain-specific errors (`SchemaError`, `RenderError`, `ConfigError`) live in
//! their respective crates. They converge into `anyhow` in `reg-cli`.

use thiserror::Error;

/// Errors that can be raised by any Registrar crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A registry kind name did not match any known registry.
    #[error("Unknown registry kind: {0}")]
    UnknownKind(String),

    /// The operation needs a sequentially numbered registry.
    #[error("Registry '{kind}' has no sequential identifiers")]
    NotSequential { kind: String },

    /// The highest id of a sequence has no successor.
    #[error("Sequence '{prefix}' has no id after its highest number")]
    SequenceExhausted { prefix: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
