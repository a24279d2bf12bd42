use anyhow::Context;
use reg_schema::{BatchOutcome, validate_dir};

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::{self, ReportView};

/// Handle `regctl validate`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let batch = run_batch(ctx)?;
    output::output(&ReportView::new(&batch.report), flags.format)?;
    Ok(Outcome::from_report(&batch.report))
}

/// Validate the configured registry directory.
pub fn run_batch(ctx: &AppContext) -> anyhow::Result<BatchOutcome> {
    validate_dir(&ctx.rules, &ctx.registry_dir).with_context(|| {
        format!(
            "failed to validate registries in {}",
            ctx.registry_dir.display()
        )
    })
}
