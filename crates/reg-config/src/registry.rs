//! Registry file locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("registries")
}

fn default_document() -> PathBuf {
    PathBuf::from("Name-Registry.md")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Directory holding the five registry JSON files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Markdown document regenerated by `regctl render`.
    #[serde(default = "default_document")]
    pub document: PathBuf,
}

impl RegistryConfig {
    /// Reject empty paths, which would silently resolve to the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "registry.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.document.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "registry.document".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            document: default_document(),
        }
    }
}
