use serde::{Deserialize, Serialize};

use crate::collection::RegistryRecord;
use crate::enums::{DomainTag, ProductStatus, RegistryKind};
use crate::lenient;

/// A deliverable with its own roadmap, users and lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Four-part classification code, `PCL-L.D.E.C`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub pcl: String,
    #[serde(default, deserialize_with = "lenient::vocabulary_list")]
    pub domain_tags: Vec<DomainTag>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub status: ProductStatus,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl RegistryRecord for Product {
    const KIND: RegistryKind = RegistryKind::Products;

    fn identity(&self) -> &str {
        &self.id
    }
}
