//! Typed collections handed from the validator to the resolver and renderer.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entities::{EntityCode, Module, Product, Project, Standard};
use crate::enums::RegistryKind;

/// A record type stored in one registry file.
pub trait RegistryRecord: DeserializeOwned + Default + Clone {
    /// Registry the record type belongs to.
    const KIND: RegistryKind;

    /// Identifying value of the record (may be empty when absent).
    fn identity(&self) -> &str;
}

/// The parsed contents of one registry file, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: RegistryRecord> Collection<T> {
    #[must_use]
    pub const fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    #[must_use]
    pub const fn kind(&self) -> RegistryKind {
        T::KIND
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record carries `id` as its identifying value.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.identity() == id)
    }
}

impl<T: RegistryRecord> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<'a, T: RegistryRecord> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// All five registries after validation.
///
/// A `None` slot means the file could not be parsed (or its root was not an
/// array); stages that depend on it skip their checks instead of failing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registries {
    pub entity_codes: Option<Collection<EntityCode>>,
    pub modules: Option<Collection<Module>>,
    pub products: Option<Collection<Product>>,
    pub projects: Option<Collection<Project>>,
    pub standards: Option<Collection<Standard>>,
}

impl Registries {
    /// Whether every registry parsed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.entity_codes.is_some()
            && self.modules.is_some()
            && self.products.is_some()
            && self.projects.is_some()
            && self.standards.is_some()
    }

    /// Registries that failed to parse.
    #[must_use]
    pub fn unavailable(&self) -> Vec<RegistryKind> {
        let slots = [
            (RegistryKind::EntityCodes, self.entity_codes.is_some()),
            (RegistryKind::Modules, self.modules.is_some()),
            (RegistryKind::Products, self.products.is_some()),
            (RegistryKind::Projects, self.projects.is_some()),
            (RegistryKind::Standards, self.standards.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(kind, present)| (!present).then_some(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            ..Product::default()
        }
    }

    #[test]
    fn contains_id_matches_identity() {
        let products = Collection::new(vec![product("PRD-001"), product("PRD-002")]);
        assert!(products.contains_id("PRD-002"));
        assert!(!products.contains_id("PRD-003"));
        assert_eq!(products.kind(), RegistryKind::Products);
    }

    #[test]
    fn empty_registries_report_every_kind_unavailable() {
        let registries = Registries::default();
        assert!(!registries.is_complete());
        assert_eq!(registries.unavailable(), RegistryKind::ALL.to_vec());
    }
}
