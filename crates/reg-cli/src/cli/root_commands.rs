use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use reg_core::RegistryKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate every registry file and resolve cross-references.
    Validate,
    /// Validate, then regenerate the marked sections of the registry document.
    Render,
    /// Append one record to a registry, validate, and re-render.
    Add(AddArgs),
    /// Print the next sequential id of a module or product.
    NextId(NextIdArgs),
    /// Print the JSON Schema of a registry file.
    Schema(SchemaArgs),
}

/// Registry selected on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    #[value(alias = "entity-codes")]
    EntityCode,
    #[value(alias = "modules")]
    Module,
    #[value(alias = "products")]
    Product,
    #[value(alias = "projects")]
    Project,
    #[value(alias = "standards")]
    Standard,
}

impl From<KindArg> for RegistryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::EntityCode => Self::EntityCodes,
            KindArg::Module => Self::Modules,
            KindArg::Product => Self::Products,
            KindArg::Project => Self::Projects,
            KindArg::Standard => Self::Standards,
        }
    }
}

/// Registries numbered `PREFIX-###`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SequentialKindArg {
    #[value(alias = "modules")]
    Module,
    #[value(alias = "products")]
    Product,
}

impl From<SequentialKindArg> for RegistryKind {
    fn from(kind: SequentialKindArg) -> Self {
        match kind {
            SequentialKindArg::Module => Self::Modules,
            SequentialKindArg::Product => Self::Products,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Registry to append to.
    pub kind: KindArg,

    /// JSON file holding the record (reads stdin when omitted or `-`).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Skip re-rendering the document after a successful add.
    #[arg(long)]
    pub no_render: bool,
}

#[derive(Clone, Debug, Args)]
pub struct NextIdArgs {
    pub kind: SequentialKindArg,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: KindArg,
}
