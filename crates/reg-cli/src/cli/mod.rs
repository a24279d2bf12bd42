use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `regctl` binary.
#[derive(Debug, Parser)]
#[command(
    name = "regctl",
    version,
    about = "Registrar - validate registries and render the name registry document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, text
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the registry JSON files (overrides `registry.dir`)
    #[arg(long, global = true)]
    pub registry_dir: Option<PathBuf>,

    /// Registry document to render (overrides `registry.document`)
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            registry_dir: self.registry_dir.clone(),
            document: self.document.clone(),
        }
    }
}
