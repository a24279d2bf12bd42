use anyhow::Context;
use reg_core::RegistryKind;
use reg_schema::store;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NextIdArgs;
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::{self, Response};

#[derive(Debug, Serialize)]
pub struct NextIdResponse {
    pub kind: RegistryKind,
    pub next_id: String,
}

impl Response for NextIdResponse {
    fn text(&self) -> String {
        self.next_id.clone()
    }
}

/// Handle `regctl next-id`.
pub fn handle(args: &NextIdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let kind = RegistryKind::from(args.kind);
    let path = store::registry_path(&ctx.registry_dir, kind);
    let entries = store::read_entries(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let next_id = store::next_id(kind, &entries)?;

    output::output(&NextIdResponse { kind, next_id }, flags.format)?;
    Ok(Outcome::Success)
}
