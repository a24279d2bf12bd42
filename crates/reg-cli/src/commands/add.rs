use std::io::Read;
use std::path::Path;

use anyhow::Context;
use reg_core::{Diagnostic, RegistryKind, Report};
use reg_render::Section;
use reg_schema::store::{self, Appended};
use reg_schema::validator::subject_of;
use reg_schema::{SchemaCatalog, SchemaError};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::{Outcome, render, validate};
use crate::context::AppContext;
use crate::output::{self, ReportView, Response};

#[derive(Debug, Serialize)]
pub struct AddResponse<'a> {
    pub kind: RegistryKind,
    pub id: String,
    pub accepted: bool,
    pub record: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<&'a [Section]>,
    #[serde(flatten)]
    pub report: ReportView<'a>,
}

impl Response for AddResponse<'_> {
    fn text(&self) -> String {
        let file = self.kind.file_name();
        let status = if self.accepted {
            match self.rendered {
                Some(sections) => format!(
                    "Added {} to {file}; {} section(s) rendered",
                    self.id,
                    sections.len()
                ),
                None => format!("Added {} to {file}", self.id),
            }
        } else {
            format!("Rejected {}; {file} unchanged", self.id)
        };
        format!("{}\n{status}", self.report.text())
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        self.report.table_value()
    }
}

/// Handle `regctl add`.
///
/// Stamps the record and checks it against the record schema of its kind
/// before anything is written. Then appends it, validates the whole
/// directory and re-renders the document. Any ERROR leaves the registry file
/// with its previous bytes.
pub fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let kind = RegistryKind::from(args.kind);
    let input = read_input(args.file.as_deref())?;
    let record: Value = serde_json::from_str(&input).context("record is not valid JSON")?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let staged = store::stage_record(&ctx.registry_dir, kind, record, &today)
        .with_context(|| format!("failed to append to {}", kind.file_name()))?;
    let id = subject_of(kind, staged.record());

    let shape = schema_report(kind, &id, staged.record())?;
    if !shape.is_success() {
        tracing::warn!(%kind, %id, errors = shape.error_count(), "record does not match schema");
        output::output(
            &AddResponse {
                kind,
                id,
                accepted: false,
                record: staged.record(),
                rendered: None,
                report: ReportView::new(&shape),
            },
            flags.format,
        )?;
        return Ok(Outcome::Failed);
    }

    let appended = staged
        .commit()
        .with_context(|| format!("failed to append to {}", kind.file_name()))?;

    let batch = match validate::run_batch(ctx) {
        Ok(batch) => batch,
        Err(error) => {
            restore(&appended)?;
            return Err(error);
        }
    };

    if !batch.is_success() {
        restore(&appended)?;
        tracing::warn!(%kind, %id, errors = batch.report.error_count(), "record rejected");
        output::output(
            &AddResponse {
                kind,
                id,
                accepted: false,
                record: &appended.record,
                rendered: None,
                report: ReportView::new(&batch.report),
            },
            flags.format,
        )?;
        return Ok(Outcome::Failed);
    }

    let mut report = batch.report;
    let rendered = if ctx.general.render_after_add && !args.no_render {
        Some(render::render_document(ctx, &batch.registries, &mut report)?.updated)
    } else {
        None
    };
    tracing::info!(%kind, %id, "record added");

    output::output(
        &AddResponse {
            kind,
            id,
            accepted: true,
            record: &appended.record,
            rendered: rendered.as_deref(),
            report: ReportView::new(&report),
        },
        flags.format,
    )?;
    Ok(Outcome::from_report(&report))
}

/// Check one record against the exported schema of `kind`.
fn schema_report(kind: RegistryKind, id: &str, record: &Value) -> anyhow::Result<Report> {
    let mut report = Report::new();
    match SchemaCatalog::new().validate(kind, record) {
        Ok(()) => {}
        Err(SchemaError::ValidationFailed { errors }) => {
            for message in errors {
                report.push(Diagnostic::error(kind.file_name(), message).with_subject(id));
            }
        }
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to check record against {kind} schema"));
        }
    }
    Ok(report)
}

fn restore(appended: &Appended) -> anyhow::Result<()> {
    appended
        .snapshot
        .restore()
        .with_context(|| format!("failed to restore {}", appended.snapshot.path().display()))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record from {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read record from stdin")?;
            Ok(input)
        }
    }
}
