use anyhow::Context;
use reg_core::RegistryKind;
use reg_schema::SchemaCatalog;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::Outcome;
use crate::output::{self, Response};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SchemaResponse(Value);

impl Response for SchemaResponse {
    fn text(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Handle `regctl schema`. Needs no configuration.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let kind = RegistryKind::from(args.kind);
    let schema = SchemaCatalog::new()
        .registry_schema(kind)
        .with_context(|| format!("no schema registered for {kind}"))?;

    output::output(&SchemaResponse(schema), flags.format)?;
    Ok(Outcome::Success)
}
