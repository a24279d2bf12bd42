//! Generic registry validator.
//!
//! Interprets the rule table in [`crate::rules`] against the raw JSON of one
//! registry file. All checks accumulate into a [`Report`]; nothing
//! short-circuits except a file that does not parse or whose root is not an
//! array, which yields a single diagnostic and no collection.

use std::collections::HashMap;

use reg_core::lenient::text;
use reg_core::{Collection, Diagnostic, RegistryKind, RegistryRecord, Report};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::rules::{FieldRule, RuleRegistry, Shape};

/// Outcome of validating one registry file.
#[derive(Debug, Clone)]
pub struct Validated<T> {
    /// Typed records, or `None` when the file could not be parsed as an array.
    pub collection: Option<Collection<T>>,
    pub report: Report,
}

impl<T> Validated<T> {
    fn unavailable(report: Report) -> Self {
        Self {
            collection: None,
            report,
        }
    }
}

/// Parse `content` as JSON and validate it as the registry of `T`.
pub fn validate_document<T: RegistryRecord>(rules: &RuleRegistry, content: &str) -> Validated<T> {
    let file = T::KIND.file_name();
    match serde_json::from_str::<Value>(content) {
        Ok(root) => validate_value(rules, &root),
        Err(error) => {
            let mut report = Report::new();
            report.push(Diagnostic::error(file, format!("Failed to parse JSON: {error}")));
            Validated::unavailable(report)
        }
    }
}

/// Validate an already-parsed registry value.
pub fn validate_value<T: RegistryRecord>(rules: &RuleRegistry, root: &Value) -> Validated<T> {
    let kind = T::KIND;
    let file = kind.file_name();
    let mut report = Report::new();
    debug!(file, "validating registry");

    let Value::Array(entries) = root else {
        report.push(Diagnostic::error(file, "Root must be an array"));
        return Validated::unavailable(report);
    };

    if entries.is_empty() {
        info!(file, "0 records (empty, ready for first registration)");
    }

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let subject = subject_of(kind, entry);
        let Value::Object(fields) = entry else {
            report.push(Diagnostic::error(file, "entry must be a JSON object").with_subject(subject));
            continue;
        };

        let mut checks = RecordChecks {
            rules,
            kind,
            file,
            subject: &subject,
            fields,
            report: &mut report,
        };
        checks.run();
        match kind {
            RegistryKind::Modules => checks.module_dependencies(entries),
            RegistryKind::Standards => checks.filename_prefix(),
            RegistryKind::EntityCodes | RegistryKind::Products | RegistryKind::Projects => {}
        }

        match serde_json::from_value::<T>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(error) => report.push(
                Diagnostic::error(file, format!("could not decode record: {error}"))
                    .with_subject(subject),
            ),
        }
    }

    let table = rules.rules(kind);
    for rule in table.fields.iter().filter(|rule| rule.unique) {
        check_unique(entries, rule.name, file, &mut report);
    }
    if let Some(prefix) = table.sequential {
        check_sequential(entries, kind.id_field(), prefix, file, &mut report);
    }

    info!(file, records = entries.len(), errors = report.error_count(), "registry checked");
    Validated {
        collection: Some(Collection::new(records)),
        report,
    }
}

/// Identifying value of a raw entry, or the kind's placeholder.
#[must_use]
pub fn subject_of(kind: RegistryKind, entry: &Value) -> String {
    entry
        .get(kind.id_field())
        .filter(|value| is_truthy(value))
        .map_or_else(|| kind.missing_id_placeholder().to_string(), text)
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Record-level checks
// ---------------------------------------------------------------------------

struct RecordChecks<'a> {
    rules: &'a RuleRegistry,
    kind: RegistryKind,
    file: &'static str,
    subject: &'a str,
    fields: &'a Map<String, Value>,
    report: &'a mut Report,
}

impl RecordChecks<'_> {
    fn error(&mut self, message: String) {
        self.report
            .push(Diagnostic::error(self.file, message).with_subject(self.subject));
    }

    fn run(&mut self) {
        let table = self.rules.rules(self.kind);
        let fields = self.fields;
        for name in table.required_fields() {
            if fields.get(name).is_none_or(Value::is_null) {
                self.error(format!("missing required field '{name}'"));
            }
        }

        for rule in table.fields {
            let Some(value) = fields.get(rule.name).filter(|v| !v.is_null()) else {
                continue;
            };
            match rule.shape {
                Shape::Scalar => self.scalar(rule, value),
                Shape::Link => self.link(rule, value),
                Shape::List => self.list(rule, value),
            }
        }
    }

    fn scalar(&mut self, rule: &FieldRule, value: &Value) {
        if let (Some(pattern), Value::String(s)) = (rule.pattern, value) {
            if !self.rules.is_match(self.kind, rule.name, s) {
                self.error(format!(
                    "field '{}' value '{s}' does not match pattern {pattern}",
                    rule.name
                ));
            }
        }
        if let Some(allowed) = rule.allowed {
            if !is_allowed(allowed, value) {
                self.error(format!(
                    "field '{}' has invalid value '{}'. Allowed: {}",
                    rule.name,
                    text(value),
                    allowed.join(", ")
                ));
            }
        }
    }

    fn link(&mut self, rule: &FieldRule, value: &Value) {
        let valid = value
            .as_str()
            .is_some_and(|s| self.rules.is_match(self.kind, rule.name, s));
        if !valid {
            self.error(format!("has invalid {} format '{}'", rule.label, text(value)));
        }
    }

    fn list(&mut self, rule: &FieldRule, value: &Value) {
        let Value::Array(items) = value else {
            self.error(format!("field '{}' must be an array", rule.name));
            return;
        };
        if items.len() < rule.min_items {
            self.error(format!("must have at least one {}", rule.label));
        }
        for item in items {
            let allowed = rule.allowed.is_none_or(|allowed| is_allowed(allowed, item));
            let matches = rule.pattern.is_none()
                || item
                    .as_str()
                    .is_some_and(|s| self.rules.is_match(self.kind, rule.name, s));
            if !allowed || !matches {
                self.error(format!("has invalid {} '{}'", rule.label, text(item)));
            }
        }
    }

    /// Dependencies must name another module of the same file.
    fn module_dependencies(&mut self, entries: &[Value]) {
        let fields = self.fields;
        let Some(Value::Array(dependencies)) = fields.get("dependencies") else {
            return;
        };
        let own_id = fields.get("id");
        for dependency in dependencies {
            if own_id == Some(dependency) {
                self.error("depends on itself".to_string());
            } else if !entries.iter().any(|entry| entry.get("id") == Some(dependency)) {
                self.error(format!(
                    "depends on '{}' which does not exist in the registry",
                    text(dependency)
                ));
            }
        }
    }

    /// A standard's filename starts with its own id.
    fn filename_prefix(&mut self) {
        let fields = self.fields;
        let (Some(Value::String(id)), Some(Value::String(filename))) =
            (fields.get("id"), fields.get("filename"))
        else {
            return;
        };
        if !id.is_empty() && !filename.starts_with(id.as_str()) {
            self.error(format!(
                "field 'filename' value '{filename}' does not start with id '{id}'"
            ));
        }
    }
}

fn is_allowed(allowed: &[&str], value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| allowed.iter().any(|candidate| *candidate == s))
}

// ---------------------------------------------------------------------------
// Collection-level checks
// ---------------------------------------------------------------------------

/// Report every repeat of a field value; N occurrences give N-1 diagnostics.
///
/// Absent and `null` values are ignored. Values compare by their JSON text, so
/// `1` and `"1"` are distinct.
fn check_unique(entries: &[Value], field: &str, file: &'static str, report: &mut Report) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for value in entries.iter().filter_map(|entry| entry.get(field)) {
        if value.is_null() {
            continue;
        }
        let count = seen.entry(value.to_string()).or_default();
        *count += 1;
        if *count > 1 {
            report.push(Diagnostic::error(
                file,
                format!("Duplicate {field}: '{}'", text(value)),
            ));
        }
    }
}

/// Sorted ids must run `PREFIX-001`, `PREFIX-002`, ... with no gaps. Only the
/// first mismatch is reported.
fn check_sequential(
    entries: &[Value],
    field: &str,
    prefix: &str,
    file: &'static str,
    report: &mut Report,
) {
    let mut ids: Vec<String> = entries
        .iter()
        .filter_map(|entry| entry.get(field))
        .filter(|value| is_truthy(value))
        .map(text)
        .collect();
    ids.sort();

    let mismatch = ids.iter().enumerate().find_map(|(index, found)| {
        let expected = reg_core::ids::sequential_id(prefix, index + 1);
        (*found != expected).then(|| (index + 1, expected, found))
    });
    if let Some((position, expected, found)) = mismatch {
        report.push(Diagnostic::error(
            file,
            format!("Expected sequential ID '{expected}' but found '{found}' at position {position}"),
        ));
    }
}
