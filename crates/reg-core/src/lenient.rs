//! Forgiving serde field adapters for registry records.
//!
//! Registry files are hand-edited. The validator reports shape problems from
//! the raw JSON, so decoding into typed records must never fail on a value of
//! the wrong JSON type: scalars are stringified, `null` becomes the default and
//! non-array list fields decode as empty.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text of a JSON value as it appears in diagnostics and rendered cells.
///
/// Strings are returned without quotes, `null` as an empty string, and every
/// other value in its compact JSON form.
#[must_use]
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| text(&value))
}

pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(|value| match value {
        Value::Null => None,
        other => Some(text(&other)),
    })
}

pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Value::deserialize(deserializer).map(|value| match value {
        Value::Array(items) => items.iter().map(text).collect(),
        _ => Vec::new(),
    })
}

/// Decode a vocabulary field from any scalar.
pub fn vocabulary<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    string(deserializer).map(T::from)
}

/// Decode a list of vocabulary values; a non-array decodes as empty.
pub fn vocabulary_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    string_list(deserializer).map(|items| items.into_iter().map(T::from).collect())
}
