//! Reading and appending to registry files.
//!
//! Registries are rewritten as two-space pretty JSON with a trailing newline.
//! Key order of existing records is preserved.

use std::fs;
use std::path::{Path, PathBuf};

use reg_core::enums::{CcpidStatus, CodeStatus, ProductStatus, ProjectStatus};
use reg_core::lenient::text;
use reg_core::{CoreError, RegistryKind, ids};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::SchemaError;

/// Path of the registry file for `kind` inside `dir`.
#[must_use]
pub fn registry_path(dir: &Path, kind: RegistryKind) -> PathBuf {
    dir.join(kind.file_name())
}

/// Read the raw entries of a registry file.
///
/// # Errors
///
/// `SchemaError::Io` when unreadable, `SchemaError::Json` when not JSON and
/// `SchemaError::NotAnArray` when the root is not an array.
pub fn read_entries(path: &Path) -> Result<Vec<Value>, SchemaError> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::io(path, source))?;
    match serde_json::from_str(&content)? {
        Value::Array(entries) => Ok(entries),
        _ => Err(SchemaError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Overwrite a registry file with `entries`.
///
/// # Errors
///
/// Returns `SchemaError::Io` if the file cannot be written.
pub fn write_entries(path: &Path, entries: &[Value]) -> Result<(), SchemaError> {
    let mut content = serde_json::to_string_pretty(entries)?;
    content.push('\n');
    fs::write(path, content).map_err(|source| SchemaError::io(path, source))
}

/// Next sequential id of a module or product registry.
///
/// # Errors
///
/// Returns `CoreError::NotSequential` for registries without sequential ids
/// and `CoreError::SequenceExhausted` when the highest id has no successor.
pub fn next_id(kind: RegistryKind, entries: &[Value]) -> Result<String, CoreError> {
    let prefix = kind.sequential_prefix().ok_or_else(|| CoreError::NotSequential {
        kind: kind.to_string(),
    })?;
    let existing: Vec<String> = entries
        .iter()
        .filter_map(|entry| entry.get(kind.id_field()))
        .map(text)
        .collect();
    ids::next_sequential_id(prefix, existing.iter().map(String::as_str))
}

/// Lifecycle fields a new record of `kind` starts with.
fn lifecycle_defaults(kind: RegistryKind) -> Vec<(&'static str, Value)> {
    let status = |value: &str| Value::String(value.to_string());
    match kind {
        RegistryKind::EntityCodes => vec![
            ("status", status(CodeStatus::Active.as_str())),
            ("ccpidStatus", status(CcpidStatus::Pending.as_str())),
        ],
        RegistryKind::Products => vec![("status", status(ProductStatus::Active.as_str()))],
        RegistryKind::Projects => vec![("status", status(ProjectStatus::Active.as_str()))],
        RegistryKind::Modules => vec![("usedByProducts", Value::Array(Vec::new()))],
        RegistryKind::Standards => Vec::new(),
    }
}

/// Fill the fields the entry collector assigns itself.
///
/// Sequential registries get the next free id when the record has none and
/// every record gets `createdAt = today`. New entity codes start `ACTIVE` with
/// a `PENDING` CCPID migration, products and projects start `Active` and
/// modules start with no `usedByProducts`. Fields that are absent or null are
/// filled; values already present are left untouched.
///
/// # Errors
///
/// Returns `CoreError::SequenceExhausted` when no id can follow the highest
/// existing one.
pub fn stamp_defaults(
    kind: RegistryKind,
    record: &mut Map<String, Value>,
    existing: &[Value],
    today: &str,
) -> Result<(), CoreError> {
    let id_field = kind.id_field();
    if kind.sequential_prefix().is_some() && record.get(id_field).is_none_or(Value::is_null) {
        let id = next_id(kind, existing)?;
        debug!(%kind, %id, "assigned next sequential id");
        record.insert(id_field.to_string(), Value::String(id));
    }
    let defaults = lifecycle_defaults(kind)
        .into_iter()
        .chain([("createdAt", Value::String(today.to_string()))]);
    for (field, value) in defaults {
        if record.get(field).is_none_or(Value::is_null) {
            record.insert(field.to_string(), value);
        }
    }
    Ok(())
}

/// Exact bytes of a registry file, kept so a failed append can be undone.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl Snapshot {
    /// Capture the current content of `path`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the file cannot be read.
    pub fn take(path: &Path) -> Result<Self, SchemaError> {
        let bytes = fs::read(path).map_err(|source| SchemaError::io(path, source))?;
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the captured bytes back.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the file cannot be written.
    pub fn restore(&self) -> Result<(), SchemaError> {
        debug!(path = %self.path.display(), "restoring registry file");
        fs::write(&self.path, &self.bytes).map_err(|source| SchemaError::io(&self.path, source))
    }
}

/// A stamped record not yet written, with the registry it will join.
#[derive(Debug, Clone)]
pub struct Staged {
    record: Value,
    entries: Vec<Value>,
    snapshot: Snapshot,
}

impl Staged {
    /// The record as it will be written.
    #[must_use]
    pub const fn record(&self) -> &Value {
        &self.record
    }

    /// Write the registry with the record appended.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the file cannot be written.
    pub fn commit(self) -> Result<Appended, SchemaError> {
        let Self {
            record,
            mut entries,
            snapshot,
        } = self;
        entries.push(record.clone());
        write_entries(snapshot.path(), &entries)?;
        debug!(path = %snapshot.path().display(), records = entries.len(), "record appended");
        Ok(Appended { record, snapshot })
    }
}

/// Record appended by [`Staged::commit`], with the snapshot taken before writing.
#[derive(Debug, Clone)]
pub struct Appended {
    pub record: Value,
    pub snapshot: Snapshot,
}

/// Stamp `record` against the registry of `kind` in `dir` without writing.
///
/// The record is stamped with [`stamp_defaults`]. The snapshot of the file is
/// taken here, so a later [`Staged::commit`] can be undone.
///
/// # Errors
///
/// `SchemaError::NotAnObject` if `record` is not an object, `SchemaError::Core`
/// if no id can be assigned, plus any error of [`read_entries`].
pub fn stage_record(
    dir: &Path,
    kind: RegistryKind,
    record: Value,
    today: &str,
) -> Result<Staged, SchemaError> {
    let Value::Object(mut fields) = record else {
        return Err(SchemaError::NotAnObject);
    };
    let path = registry_path(dir, kind);
    let snapshot = Snapshot::take(&path)?;
    let entries = read_entries(&path)?;

    stamp_defaults(kind, &mut fields, &entries, today)?;
    Ok(Staged {
        record: Value::Object(fields),
        entries,
        snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn next_id_uses_highest_existing() {
        let entries = vec![json!({"id": "MOD-001"}), json!({"id": "MOD-004"}), json!({})];
        assert_eq!(next_id(RegistryKind::Modules, &entries).unwrap(), "MOD-005");
        assert_eq!(next_id(RegistryKind::Products, &[]).unwrap(), "PRD-001");
        assert!(next_id(RegistryKind::Projects, &[]).is_err());
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn stamp_defaults_keeps_explicit_values() {
        let mut record = object(json!({
            "id": "PRD-007",
            "status": "Sunset",
            "createdAt": "2024-12-31"
        }));
        stamp_defaults(RegistryKind::Products, &mut record, &[], "2025-06-01").unwrap();
        assert_eq!(record["id"], json!("PRD-007"));
        assert_eq!(record["status"], json!("Sunset"));
        assert_eq!(record["createdAt"], json!("2024-12-31"));
    }

    #[test]
    fn stamp_defaults_never_assigns_project_ids() {
        let mut record = Map::new();
        stamp_defaults(RegistryKind::Projects, &mut record, &[], "2025-06-01").unwrap();
        assert!(record.get("ccpid").is_none());
        assert_eq!(record["status"], json!("Active"));
        assert_eq!(record["createdAt"], json!("2025-06-01"));
    }

    #[test]
    fn new_entity_codes_start_active_and_pending() {
        let mut record = object(json!({"code": "ORG", "status": null}));
        stamp_defaults(RegistryKind::EntityCodes, &mut record, &[], "2025-06-01").unwrap();
        assert_eq!(record["status"], json!("ACTIVE"));
        assert_eq!(record["ccpidStatus"], json!("PENDING"));
    }

    #[test]
    fn new_products_and_modules_get_lifecycle_fields() {
        let mut product = Map::new();
        stamp_defaults(RegistryKind::Products, &mut product, &[], "2025-06-01").unwrap();
        assert_eq!(product["id"], json!("PRD-001"));
        assert_eq!(product["status"], json!("Active"));

        let mut module = object(json!({"slug": "billing"}));
        stamp_defaults(RegistryKind::Modules, &mut module, &[], "2025-06-01").unwrap();
        assert_eq!(module["usedByProducts"], json!([]));
        assert!(module.get("status").is_none());

        let mut standard = Map::new();
        stamp_defaults(RegistryKind::Standards, &mut standard, &[], "2025-06-01").unwrap();
        assert_eq!(standard.len(), 1);
    }

    #[test]
    fn stamp_defaults_fails_when_sequence_is_exhausted() {
        let existing = vec![json!({"id": format!("MOD-{}", usize::MAX)})];
        let mut record = Map::new();
        let result = stamp_defaults(RegistryKind::Modules, &mut record, &existing, "2025-06-01");
        assert!(matches!(result, Err(CoreError::SequenceExhausted { .. })));
        assert!(record.is_empty());
    }

    #[test]
    fn staged_records_are_not_written_until_committed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = registry_path(tmp.path(), RegistryKind::Products);
        let original = "[]\n";
        fs::write(&path, original).unwrap();

        let staged = stage_record(
            tmp.path(),
            RegistryKind::Products,
            json!({"name": "Ledger"}),
            "2025-06-01",
        )
        .unwrap();
        assert_eq!(staged.record()["id"], json!("PRD-001"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        staged.commit().unwrap();
        assert_eq!(read_entries(&path).unwrap().len(), 1);
    }

    #[test]
    fn append_then_restore_round_trips_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = registry_path(tmp.path(), RegistryKind::Products);
        let original = "[\n    {\"id\": \"PRD-001\"}\n]\n";
        fs::write(&path, original).unwrap();

        let appended = stage_record(
            tmp.path(),
            RegistryKind::Products,
            json!({"name": "Ledger"}),
            "2025-06-01",
        )
        .and_then(Staged::commit)
        .unwrap();
        assert_eq!(appended.record["id"], json!("PRD-002"));
        assert_eq!(read_entries(&path).unwrap().len(), 2);

        appended.snapshot.restore().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn written_files_keep_key_order_and_trailing_newline() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("modules.json");
        let entries = vec![json!({"id": "MOD-001", "slug": "a", "createdAt": "2025-01-01"})];
        write_entries(&path, &entries).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("}\n]\n"));
        let id_at = content.find("\"id\"").unwrap();
        let slug_at = content.find("\"slug\"").unwrap();
        assert!(id_at < slug_at);
    }

    #[test]
    fn non_object_records_are_refused() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = stage_record(tmp.path(), RegistryKind::Modules, json!([1]), "2025-06-01");
        assert!(matches!(result, Err(SchemaError::NotAnObject)));
    }
}
