use serde::{Deserialize, Serialize};

use crate::collection::RegistryRecord;
use crate::enums::{ProjectClassification, ProjectStatus, RegistryKind, Tracker};
use crate::lenient;

/// A time-bound body of work, optionally linked to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Public id, `PRJ-<token>-<check>`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub ccpid: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain_code: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub classification: ProjectClassification,
    /// Prefix for work-order-entry items, e.g. `CS-ER`.
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub woe_prefix: Option<String>,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub tracker: Tracker,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl RegistryRecord for Project {
    const KIND: RegistryKind = RegistryKind::Projects;

    fn identity(&self) -> &str {
        &self.ccpid
    }
}
