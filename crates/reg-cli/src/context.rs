use std::path::PathBuf;

use anyhow::Context;
use reg_config::{GeneralConfig, RegistrarConfig};
use reg_schema::RuleRegistry;

use crate::cli::GlobalFlags;

/// Resolved locations and compiled rules shared by every command.
#[derive(Debug)]
pub struct AppContext {
    pub registry_dir: PathBuf,
    pub document: PathBuf,
    pub general: GeneralConfig,
    pub rules: RuleRegistry,
}

impl AppContext {
    /// Load layered configuration and apply command-line overrides on top.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config =
            RegistrarConfig::load_with_dotenv().context("failed to load registrar configuration")?;
        Self::from_config(config, flags)
    }

    pub fn from_config(config: RegistrarConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let registry_dir = flags
            .registry_dir
            .clone()
            .unwrap_or(config.registry.dir);
        let document = flags.document.clone().unwrap_or(config.registry.document);
        let rules = RuleRegistry::new().context("failed to compile registry rules")?;

        tracing::debug!(
            registry_dir = %registry_dir.display(),
            document = %document.display(),
            patterns = rules.pattern_count(),
            "application context ready"
        );

        Ok(Self {
            registry_dir,
            document,
            general: config.general,
            rules,
        })
    }
}
