use serde::{Deserialize, Serialize};

use crate::collection::RegistryRecord;
use crate::enums::{CcpidStatus, CodeStatus, EntityCategory, RegistryKind};
use crate::lenient;

/// A kind of database record that carries a public CC-PID.
///
/// The three-letter `code` becomes the prefix of every public id issued for
/// rows of `db_table`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCode {
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub category: EntityCategory,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub db_table: String,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub status: CodeStatus,
    #[serde(default, deserialize_with = "lenient::vocabulary")]
    pub ccpid_status: CcpidStatus,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl RegistryRecord for EntityCode {
    const KIND: RegistryKind = RegistryKind::EntityCodes;

    fn identity(&self) -> &str {
        &self.code
    }
}
