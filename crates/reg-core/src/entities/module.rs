use serde::{Deserialize, Serialize};

use crate::collection::RegistryRecord;
use crate::enums::{ModuleScope, RegistryKind, Reusability, Stability};
use crate::lenient;

/// A reusable building block shared across products.
///
/// `id` and `slug` are immutable once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub scope: ModuleScope,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub reusability: Reusability,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub stability: Stability,
    #[serde(default, deserialize_with = "lenient::string")]
    pub owner: String,
    /// Catalog number of the standard this module implements (not the standard id).
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_standard: String,
    /// Ids of other modules this one depends on.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub dependencies: Vec<String>,
    /// Ids of products that consume this module.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub used_by_products: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl RegistryRecord for Module {
    const KIND: RegistryKind = RegistryKind::Modules;

    fn identity(&self) -> &str {
        &self.id
    }
}
