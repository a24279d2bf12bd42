//! Sequential identifier helpers.
//!
//! Modules and products carry gapless ids of the form `PREFIX-###`, starting
//! at `PREFIX-001`.

use crate::errors::CoreError;

/// Prefix of module identifiers (`MOD-001`).
pub const MODULE_PREFIX: &str = "MOD";

/// Prefix of product identifiers (`PRD-001`).
pub const PRODUCT_PREFIX: &str = "PRD";

/// Format the `ordinal`-th id of a sequence, zero-padded to three digits.
#[must_use]
pub fn sequential_id(prefix: &str, ordinal: usize) -> String {
    format!("{prefix}-{ordinal:03}")
}

/// Parse the numeric part of a sequential id, if it carries `prefix`.
#[must_use]
pub fn sequence_number(prefix: &str, id: &str) -> Option<usize> {
    let digits = id.strip_prefix(prefix)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Next free id after the highest well-formed id in `existing`.
///
/// Malformed ids are ignored; an empty registry starts at `PREFIX-001`.
///
/// # Errors
///
/// Returns `CoreError::SequenceExhausted` when the highest id is already the
/// largest representable number.
pub fn next_sequential_id<'a>(
    prefix: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> Result<String, CoreError> {
    let highest = existing
        .into_iter()
        .filter_map(|id| sequence_number(prefix, id))
        .max()
        .unwrap_or(0);
    let next = highest
        .checked_add(1)
        .ok_or_else(|| CoreError::SequenceExhausted {
            prefix: prefix.to_string(),
        })?;
    Ok(sequential_id(prefix, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_zero_padded() {
        assert_eq!(sequential_id(MODULE_PREFIX, 1), "MOD-001");
        assert_eq!(sequential_id(PRODUCT_PREFIX, 42), "PRD-042");
        assert_eq!(sequential_id(PRODUCT_PREFIX, 1000), "PRD-1000");
    }

    #[test]
    fn sequence_number_requires_prefix_and_digits() {
        assert_eq!(sequence_number("MOD", "MOD-007"), Some(7));
        assert_eq!(sequence_number("MOD", "PRD-007"), None);
        assert_eq!(sequence_number("MOD", "MOD-"), None);
        assert_eq!(sequence_number("MOD", "MOD-0x1"), None);
    }

    #[test]
    fn next_id_follows_highest() {
        assert_eq!(next_sequential_id("MOD", []).unwrap(), "MOD-001");
        assert_eq!(
            next_sequential_id("MOD", ["MOD-001", "MOD-002", "junk"]).unwrap(),
            "MOD-003"
        );
        assert_eq!(
            next_sequential_id("PRD", ["PRD-004", "PRD-001"]).unwrap(),
            "PRD-005"
        );
    }

    #[test]
    fn next_id_after_largest_number_is_an_error() {
        let last = format!("MOD-{}", usize::MAX);
        assert_eq!(sequence_number("MOD", &last), Some(usize::MAX));
        assert!(matches!(
            next_sequential_id("MOD", [last.as_str()]),
            Err(CoreError::SequenceExhausted { prefix }) if prefix == "MOD"
        ));
    }
}
