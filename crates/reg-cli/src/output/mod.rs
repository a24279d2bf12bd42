use std::io::IsTerminal;

use reg_core::{Diagnostic, Report};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// A command result that can be printed in every output format.
pub trait Response: Serialize {
    /// Human-readable form used by `--format text`.
    fn text(&self) -> String;

    /// Value tabulated by `--format table`. Defaults to the JSON form.
    fn table_value(&self) -> anyhow::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Response>(value: &T, format: OutputFormat, color: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.text()),
        OutputFormat::Table => Ok(render_table(&value.table_value()?, color)),
    }
}

/// Print a response to stdout in the requested format.
pub fn output<T: Response>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let color = std::io::stdout().is_terminal();
    let rendered = render(value, format, color)?;
    println!("{rendered}");
    Ok(())
}

fn table_options(color: bool) -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|columns| columns.parse().ok()),
        color,
    }
}

fn render_table(value: &Value, color: bool) -> String {
    let options = table_options(color);
    match value {
        Value::Array(items) => render_array_table(items, options),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            table::render_table(&["key", "value"], &rows, options)
        }
        scalar => table::render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// Serializable view of a [`Report`] with its counts.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub success: bool,
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: &'a [Diagnostic],
    #[serde(skip)]
    report: &'a Report,
}

impl<'a> ReportView<'a> {
    #[must_use]
    pub fn new(report: &'a Report) -> Self {
        Self {
            success: report.is_success(),
            errors: report.error_count(),
            warnings: report.warn_count(),
            diagnostics: report.diagnostics(),
            report,
        }
    }
}

/// One line per diagnostic followed by the summary line.
#[must_use]
pub fn report_text(report: &Report) -> String {
    let mut out = String::new();
    for diagnostic in report {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    if !report.is_empty() {
        out.push('\n');
    }
    out.push_str(&report.summary());
    out
}

impl Response for ReportView<'_> {
    fn text(&self) -> String {
        report_text(self.report)
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        Ok(serde_json::to_value(self.diagnostics)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reg_core::{Diagnostic, Report};

    use super::{ReportView, render};
    use crate::cli::OutputFormat;

    fn sample() -> Report {
        let mut report = Report::new();
        report.push(
            Diagnostic::error("modules.json", "depends on itself").with_subject("MOD-002"),
        );
        report.push(Diagnostic::warn("cross-ref", "Skipping modules.json -> products.json references (products.json failed to load)"));
        report
    }

    #[test]
    fn text_lists_diagnostics_then_summary() {
        let report = sample();
        let out = render(&ReportView::new(&report), OutputFormat::Text, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ERROR [modules.json]: MOD-002 depends on itself");
        assert!(lines[1].starts_with("WARN  [cross-ref]: Skipping"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Result: 1 error(s), 1 warning(s)");
    }

    #[test]
    fn clean_report_prints_only_summary() {
        let out = render(&ReportView::new(&Report::new()), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "Result: 0 error(s), 0 warning(s)");
    }

    #[test]
    fn json_carries_counts_and_diagnostics() {
        let report = sample();
        let out = render(&ReportView::new(&report), OutputFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["errors"], 1);
        assert_eq!(parsed["diagnostics"][0]["severity"], "ERROR");
        assert_eq!(parsed["diagnostics"][0]["subject"], "MOD-002");
        assert!(parsed["diagnostics"][1].get("subject").is_none());
    }

    #[test]
    fn table_has_one_row_per_diagnostic() {
        let report = sample();
        let out = render(&ReportView::new(&report), OutputFormat::Table, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("severity"));
        assert!(lines[2].starts_with("ERROR"));
    }
}
