//! Registry kinds and the closed vocabularies used by registry records.
//!
//! Vocabulary enums are generated by [`vocabulary!`]. Each one serializes to
//! the exact string stored in the registry files and keeps values outside the
//! vocabulary in an `Other` variant, so a record with a bad value still decodes
//! and the validator can report it instead of failing the whole file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RegistryKind
// ---------------------------------------------------------------------------

/// One of the five registries, each stored as a JSON array in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryKind {
    EntityCodes,
    Modules,
    Products,
    Projects,
    Standards,
}

impl RegistryKind {
    /// All kinds in batch order.
    pub const ALL: [Self; 5] = [
        Self::EntityCodes,
        Self::Modules,
        Self::Products,
        Self::Projects,
        Self::Standards,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntityCodes => "entity-codes",
            Self::Modules => "modules",
            Self::Products => "products",
            Self::Projects => "projects",
            Self::Standards => "standards",
        }
    }

    /// File name of the registry inside the registry directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::EntityCodes => "entity-codes.json",
            Self::Modules => "modules.json",
            Self::Products => "products.json",
            Self::Projects => "projects.json",
            Self::Standards => "standards.json",
        }
    }

    /// JSON field holding the identifying value of a record.
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::EntityCodes => "code",
            Self::Projects => "ccpid",
            Self::Modules | Self::Products | Self::Standards => "id",
        }
    }

    /// Placeholder used in diagnostics when a record has no identifying value.
    #[must_use]
    pub const fn missing_id_placeholder(self) -> &'static str {
        match self {
            Self::EntityCodes => "(no code)",
            Self::Projects => "(no ccpid)",
            Self::Modules | Self::Products | Self::Standards => "(no id)",
        }
    }

    /// Prefix of gapless sequential identifiers, for registries that have them.
    #[must_use]
    pub const fn sequential_prefix(self) -> Option<&'static str> {
        match self {
            Self::Modules => Some(crate::ids::MODULE_PREFIX),
            Self::Products => Some(crate::ids::PRODUCT_PREFIX),
            Self::EntityCodes | Self::Projects | Self::Standards => None,
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.file_name() == s)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Vocabulary generator
// ---------------------------------------------------------------------------

/// Generate a closed-vocabulary enum with an `Other` catch-all.
///
/// The generated type exposes `VALUES` (the allowed strings in canonical
/// order), `as_str()`, `is_known()`, `From<String>`, `Display` and string-based
/// serde impls.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value outside the vocabulary, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Allowed values in canonical order.
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Entity codes
// ---------------------------------------------------------------------------

vocabulary! {
    /// Functional area an entity code belongs to.
    EntityCategory {
        CustomerOrg => "Customer & Org",
        SupportComms => "Support & Comms",
        ProjectMgmt => "Project Mgmt",
        BillingFinance => "Billing & Finance",
        ContentDocs => "Content & Docs",
        SystemIntegration => "System & Integration",
        AccessControl => "Access Control",
    }
}

vocabulary! {
    /// Lifecycle of an entity code.
    CodeStatus {
        Active => "ACTIVE",
        Deprecated => "DEPRECATED",
    }
}

vocabulary! {
    /// Rollout state of public CC-PID identifiers for an entity type.
    CcpidStatus {
        Complete => "COMPLETE",
        MigrationReady => "MIGRATION READY",
        Pending => "PENDING",
    }
}

impl CcpidStatus {
    /// Presentation order used by the UUID crosswalk: complete rollouts first,
    /// unknown values last.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Complete => 0,
            Self::MigrationReady => 1,
            Self::Pending => 2,
            Self::Other(_) => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

vocabulary! {
    /// Layer of the system a module operates in.
    ModuleScope {
        Platform => "Platform",
        Core => "Core",
        Domain => "Domain",
        Integration => "Integration",
        Ui => "UI",
        Governance => "Governance",
        Experimental => "Experimental",
    }
}

vocabulary! {
    /// How widely a module is meant to be reused.
    Reusability {
        Global => "Global",
        Portfolio => "Portfolio",
        Product => "Product",
    }
}

vocabulary! {
    /// API stability of a module.
    ///
    /// ```text
    /// Experimental → Beta → Stable → Deprecated → Retired
    /// ```
    Stability {
        Experimental => "Experimental",
        Beta => "Beta",
        Stable => "Stable",
        Deprecated => "Deprecated",
        Retired => "Retired",
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

vocabulary! {
    ProductStatus {
        Active => "Active",
        Sunset => "Sunset",
        Deprecated => "Deprecated",
        Archived => "Archived",
    }
}

vocabulary! {
    /// Fixed domain vocabulary for product tagging.
    DomainTag {
        Analytics => "Analytics",
        Collaboration => "Collaboration",
        Commerce => "Commerce",
        Communication => "Communication",
        Compliance => "Compliance",
        DataManagement => "Data Management",
        DeveloperTools => "Developer Tools",
        Education => "Education",
        Finance => "Finance",
        Healthcare => "Healthcare",
        IdentityAuth => "Identity/Auth",
        Infrastructure => "Infrastructure",
        Marketing => "Marketing",
        Operations => "Operations",
        Productivity => "Productivity",
        ProjectManagement => "Project Management",
        Security => "Security",
        Unlisted => "Other",
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

vocabulary! {
    ProjectClassification {
        OneOff => "One-off",
        Product => "Product",
        Rsm => "RSM",
    }
}

vocabulary! {
    /// Work tracker a project is managed in.
    Tracker {
        Jira => "Jira",
        GitHub => "GitHub",
        Linear => "Linear",
    }
}

vocabulary! {
    ProjectStatus {
        Active => "Active",
        Complete => "Complete",
        Archived => "Archived",
    }
}

// ---------------------------------------------------------------------------
// Standards
// ---------------------------------------------------------------------------

vocabulary! {
    /// Kind of governance document.
    StandardType {
        Standard => "Standard",
        Policy => "Policy",
        Plan => "Plan",
        Template => "Template",
        Framework => "Framework",
    }
}

vocabulary! {
    StandardDomain {
        Governance => "Governance",
        Security => "Security",
        DataPrivacy => "Data & Privacy",
        Operations => "Operations",
        Engineering => "Engineering",
        AuditMetrics => "Audit & Metrics",
        Policies => "Policies",
    }
}

vocabulary! {
    StandardStatus {
        Active => "Active",
        Deprecated => "Deprecated",
        Withdrawn => "Withdrawn",
    }
}

vocabulary! {
    /// Information classification of a standard.
    Classification {
        Public => "PUBLIC",
        Internal => "INTERNAL",
        Confidential => "CONFIDENTIAL",
        Restricted => "RESTRICTED",
    }
}
