use serde::{Deserialize, Serialize};

use crate::collection::RegistryRecord;
use crate::enums::{Classification, RegistryKind, StandardDomain, StandardStatus, StandardType};
use crate::lenient;

/// A governance document: standard, policy, plan, template or framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    /// Catalog number such as `4.2`; modules reference standards by this value.
    #[serde(default, deserialize_with = "lenient::string")]
    pub catalog_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::vocabulary")]
    pub kind: StandardType,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub domain: StandardDomain,
    #[serde(default, deserialize_with = "lenient::string")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub status: StandardStatus,
    #[serde(default, deserialize_with = "lenient::string")]
    pub effective: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub classification: Classification,
    #[serde(default, deserialize_with = "lenient::string")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl RegistryRecord for Standard {
    const KIND: RegistryKind = RegistryKind::Standards;

    fn identity(&self) -> &str {
        &self.id
    }
}
