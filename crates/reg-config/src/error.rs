//! Errors raised while loading Registrar configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to parse, or a value did not deserialize.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A loaded value is unusable, such as an empty registry path.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
