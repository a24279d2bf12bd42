//! JSON Schema export of the rule table.
//!
//! [`SchemaCatalog`] builds one record schema per registry kind from
//! [`crate::rules`] at construction time and validates arbitrary JSON values
//! against them with `jsonschema`. Uniqueness and sequencing span the whole
//! collection and have no JSON Schema equivalent; they are noted in
//! `$comment`s only.

use std::collections::HashMap;

use reg_core::RegistryKind;
use serde_json::{Map, Value, json};

use crate::error::SchemaError;
use crate::rules::{FieldRule, KindRules, Shape, rules_for};

const DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Record schemas for every registry kind.
pub struct SchemaCatalog {
    schemas: HashMap<RegistryKind, Value>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new() -> Self {
        let schemas = RegistryKind::ALL
            .into_iter()
            .map(|kind| (kind, record_schema(rules_for(kind))))
            .collect();
        Self { schemas }
    }

    /// Schema of a single record of `kind`.
    #[must_use]
    pub fn get(&self, kind: RegistryKind) -> Option<&Value> {
        self.schemas.get(&kind)
    }

    /// Schema of a whole registry file of `kind`: an array of records.
    #[must_use]
    pub fn registry_schema(&self, kind: RegistryKind) -> Option<Value> {
        let rules = rules_for(kind);
        let mut items = self.get(kind)?.clone();
        if let Value::Object(map) = &mut items {
            map.remove("$schema");
            map.remove("title");
        }
        let mut schema = json!({
            "$schema": DRAFT,
            "title": kind.file_name(),
            "type": "array",
            "items": items,
        });
        if let Some(prefix) = rules.sequential {
            schema["$comment"] = Value::String(format!(
                "`{}` values form the gapless sequence {prefix}-001, {prefix}-002, ...",
                kind.id_field()
            ));
        }
        Some(schema)
    }

    /// Validate a single record against the schema of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if the schema does not compile, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, kind: RegistryKind, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(kind)
            .ok_or_else(|| SchemaError::Generation(format!("no schema for {kind}")))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn record_schema(rules: &KindRules) -> Value {
    let properties: Map<String, Value> = rules
        .fields
        .iter()
        .map(|rule| (rule.name.to_string(), field_schema(rule)))
        .collect();
    let required: Vec<&str> = rules.required_fields().collect();

    json!({
        "$schema": DRAFT,
        "title": format!("{} record", rules.kind),
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

fn field_schema(rule: &FieldRule) -> Value {
    let mut schema = match rule.shape {
        Shape::Scalar => value_schema(rule),
        Shape::Link => {
            let mut link = json!({ "type": ["string", "null"] });
            if let Some(pattern) = rule.pattern {
                link["pattern"] = Value::String(pattern.to_string());
            }
            link
        }
        Shape::List => {
            let mut list = json!({ "type": "array", "items": value_schema(rule) });
            if rule.min_items > 0 {
                list["minItems"] = json!(rule.min_items);
            }
            list
        }
    };
    if rule.unique {
        schema["$comment"] = Value::String("unique across the registry".to_string());
    }
    schema
}

/// Schema of a single value: an enum, or a string with an optional pattern.
fn value_schema(rule: &FieldRule) -> Value {
    if let Some(allowed) = rule.allowed {
        return json!({ "enum": allowed });
    }
    let mut schema = json!({ "type": "string" });
    if let Some(pattern) = rule.pattern {
        schema["pattern"] = Value::String(pattern.to_string());
    }
    schema
}
