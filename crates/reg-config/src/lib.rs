//! # reg-config
//!
//! Layered configuration loading for Registrar using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REGISTRAR_*` prefix, `__` as separator)
//! 2. Project-level `.registrar/config.toml`
//! 3. User-level `~/.config/registrar/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags of `regctl` are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REGISTRAR_REGISTRY__DIR` -> `registry.dir` and
//! `REGISTRAR_GENERAL__RENDER_AFTER_ADD` -> `general.render_after_add`.
//!
//! # Usage
//!
//! ```no_run
//! use reg_config::RegistrarConfig;
//!
//! let config = RegistrarConfig::load_with_dotenv().expect("config");
//! println!("registries in {}", config.registry.dir.display());
//! ```

mod error;
mod general;
mod registry;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use registry::RegistryConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".registrar/config.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "REGISTRAR_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RegistrarConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed or
    /// extracted, and `ConfigError::InvalidValue` for empty paths.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.registry.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(error) => debug!(%error, "no .env loaded"),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("registrar").join("config.toml"))
    }
}
