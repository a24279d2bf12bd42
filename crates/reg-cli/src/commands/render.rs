use anyhow::Context;
use reg_core::{Registries, Report};
use reg_render::{RenderOutcome, Section, render_file};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::commands::{Outcome, validate};
use crate::context::AppContext;
use crate::output::{self, ReportView, Response};

#[derive(Debug, Serialize)]
pub struct RenderResponse<'a> {
    pub document: String,
    pub updated: &'a [Section],
    pub changed: bool,
    #[serde(flatten)]
    pub report: ReportView<'a>,
}

impl Response for RenderResponse<'_> {
    fn text(&self) -> String {
        let state = if self.changed { "updated" } else { "unchanged" };
        format!(
            "{}\n{}: {} section(s) rendered, {state}",
            self.report.text(),
            self.document,
            self.updated.len()
        )
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        self.report.table_value()
    }
}

/// Handle `regctl render`.
///
/// The document is only touched when validation reports no ERROR.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let batch = validate::run_batch(ctx)?;
    if !batch.is_success() {
        tracing::warn!(
            errors = batch.report.error_count(),
            "validation failed; document not rendered"
        );
        output::output(&ReportView::new(&batch.report), flags.format)?;
        return Ok(Outcome::Failed);
    }

    let mut report = batch.report;
    let rendered = render_document(ctx, &batch.registries, &mut report)?;
    output::output(
        &RenderResponse {
            document: ctx.document.display().to_string(),
            updated: &rendered.updated,
            changed: rendered.changed,
            report: ReportView::new(&report),
        },
        flags.format,
    )?;
    Ok(Outcome::from_report(&report))
}

/// Rewrite the configured document and append its warnings to `report`.
pub fn render_document(
    ctx: &AppContext,
    registries: &Registries,
    report: &mut Report,
) -> anyhow::Result<RenderOutcome> {
    let outcome = render_file(&ctx.document, registries)
        .with_context(|| format!("failed to render {}", ctx.document.display()))?;
    report.merge(outcome.report.clone());
    Ok(outcome)
}
