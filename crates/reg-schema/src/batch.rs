//! Validate a whole registry directory.
//!
//! The five files are read and validated one after another in
//! [`RegistryKind::ALL`] order, then cross-references are resolved. A file
//! that cannot be read aborts the batch; a file that cannot be parsed only
//! makes its collection unavailable.

use std::fs;
use std::path::Path;

use reg_core::entities::{EntityCode, Module, Product, Project, Standard};
use reg_core::{Collection, RegistryRecord, Registries, Report};
use serde::Serialize;
use tracing::info;

use crate::crossref;
use crate::error::SchemaError;
use crate::rules::RuleRegistry;
use crate::validator::{self, Validated};

/// Report and collections produced by one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub report: Report,
    #[serde(skip)]
    pub registries: Registries,
}

impl BatchOutcome {
    /// A batch succeeds when no ERROR was reported.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.report.is_success()
    }
}

/// Validate every registry file in `dir` and resolve cross-references.
///
/// # Errors
///
/// Returns `SchemaError::Io` if a registry file is missing or unreadable.
pub fn validate_dir(rules: &RuleRegistry, dir: &Path) -> Result<BatchOutcome, SchemaError> {
    let mut report = Report::new();
    let registries = Registries {
        entity_codes: load::<EntityCode>(rules, dir, &mut report)?,
        modules: load::<Module>(rules, dir, &mut report)?,
        products: load::<Product>(rules, dir, &mut report)?,
        projects: load::<Project>(rules, dir, &mut report)?,
        standards: load::<Standard>(rules, dir, &mut report)?,
    };

    report.merge(crossref::resolve(rules, &registries));
    info!(
        errors = report.error_count(),
        warnings = report.warn_count(),
        "registry validation finished"
    );
    Ok(BatchOutcome { report, registries })
}

fn load<T: RegistryRecord>(
    rules: &RuleRegistry,
    dir: &Path,
    report: &mut Report,
) -> Result<Option<Collection<T>>, SchemaError> {
    let path = dir.join(T::KIND.file_name());
    let content = fs::read_to_string(&path).map_err(|source| SchemaError::io(&path, source))?;
    let Validated {
        collection,
        report: file_report,
    } = validator::validate_document::<T>(rules, &content);
    report.merge(file_report);
    Ok(collection)
}
