use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Text,
}

/// Global flags that command handlers need. `--quiet`/`--verbose` only shape logging.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub registry_dir: Option<PathBuf>,
    pub document: Option<PathBuf>,
}
