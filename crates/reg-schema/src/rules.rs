//! Declarative rule table for the five registries.
//!
//! Each registry kind maps to a [`KindRules`]: an ordered list of
//! [`FieldRule`]s plus an optional sequential-id prefix. The table is plain
//! data; [`crate::validator`] interprets it and [`crate::export`] turns it into
//! JSON Schema. Vocabularies come straight from the `reg-core` enums so the
//! typed records and the validator can never disagree.

use std::collections::HashMap;

use reg_core::RegistryKind;
use reg_core::enums::{
    CcpidStatus, Classification, CodeStatus, DomainTag, EntityCategory, ModuleScope,
    ProductStatus, ProjectClassification, ProjectStatus, Reusability, Stability, StandardDomain,
    StandardStatus, StandardType, Tracker,
};
use reg_core::ids::{MODULE_PREFIX, PRODUCT_PREFIX};
use regex::Regex;

use crate::error::SchemaError;

pub const ENTITY_CODE_PATTERN: &str = r"^[A-Z]{3}$";
pub const DB_TABLE_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
pub const MODULE_ID_PATTERN: &str = r"^MOD-[0-9]{3}$";
pub const SLUG_PATTERN: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";
pub const PRODUCT_ID_PATTERN: &str = r"^PRD-[0-9]{3}$";
pub const PCL_PATTERN: &str = r"^PCL-[0-9]\.[0-9]\.[0-9]\.[0-9]$";
pub const CCPID_PATTERN: &str = r"^PRJ-[A-HJ-NP-Z2-9]{6,8}-[A-HJ-NP-Z2-9]$";
pub const DOMAIN_CODE_PATTERN: &str = r"^[A-Z0-9]{2,3}-[A-Z0-9]{2,3}$";
pub const STANDARD_ID_PATTERN: &str = r"^(STD|POL|PLN|TPL|FWK)-[A-Z]{2,3}-[0-9]{3}$";
pub const CATALOG_NUMBER_PATTERN: &str = r"^[0-9]+\.[0-9]+$";
pub const VERSION_PATTERN: &str = r"^v[0-9]+(\.[0-9]+)*$";
pub const FILENAME_PATTERN: &str = r"^(STD|POL|PLN|TPL|FWK)-[A-Z]{2,3}-[0-9]{3} CYBERCUBE-.+\.md$";

// ---------------------------------------------------------------------------
// Rule types
// ---------------------------------------------------------------------------

/// JSON shape a field is checked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single value; `pattern` applies to strings only, `allowed` to any value.
    Scalar,
    /// An optional reference to another record; when present and non-null it
    /// must be a string matching `pattern`.
    Link,
    /// An array whose items are checked against `allowed` and `pattern`.
    List,
}

/// Rules for one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON (camelCase) field name.
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
    pub allowed: Option<&'static [&'static str]>,
    pub pattern: Option<&'static str>,
    /// Value must not repeat across the collection.
    pub unique: bool,
    /// Noun used in item-level messages for links and lists.
    pub label: &'static str,
    /// Minimum number of list items.
    pub min_items: usize,
}

impl FieldRule {
    const fn new(name: &'static str, shape: Shape, label: &'static str) -> Self {
        Self {
            name,
            shape,
            required: false,
            allowed: None,
            pattern: None,
            unique: false,
            label,
            min_items: 0,
        }
    }

    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self::new(name, Shape::Scalar, name)
    }

    #[must_use]
    pub const fn link(name: &'static str) -> Self {
        Self::new(name, Shape::Link, name)
    }

    #[must_use]
    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self::new(name, Shape::List, label)
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    #[must_use]
    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn non_empty(mut self) -> Self {
        self.min_items = 1;
        self
    }
}

/// Rules for every record of one registry.
#[derive(Debug, Clone, Copy)]
pub struct KindRules {
    pub kind: RegistryKind,
    pub fields: &'static [FieldRule],
    /// Prefix of the gapless id sequence checked on the id field.
    pub sequential: Option<&'static str>,
}

impl KindRules {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|rule| rule.required)
            .map(|rule| rule.name)
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

pub static ENTITY_CODE_RULES: KindRules = KindRules {
    kind: RegistryKind::EntityCodes,
    fields: &[
        FieldRule::scalar("code").required().pattern(ENTITY_CODE_PATTERN).unique(),
        FieldRule::scalar("name").required(),
        FieldRule::scalar("category").required().one_of(EntityCategory::VALUES),
        FieldRule::scalar("description").required(),
        FieldRule::scalar("dbTable").required().pattern(DB_TABLE_PATTERN).unique(),
        FieldRule::scalar("status").required().one_of(CodeStatus::VALUES),
        FieldRule::scalar("ccpidStatus").required().one_of(CcpidStatus::VALUES),
        FieldRule::scalar("createdAt").required(),
    ],
    sequential: None,
};

pub static MODULE_RULES: KindRules = KindRules {
    kind: RegistryKind::Modules,
    fields: &[
        FieldRule::scalar("id").required().pattern(MODULE_ID_PATTERN).unique(),
        FieldRule::scalar("slug").required().pattern(SLUG_PATTERN).unique(),
        FieldRule::scalar("name").required(),
        FieldRule::scalar("scope").required().one_of(ModuleScope::VALUES),
        FieldRule::scalar("reusability").required().one_of(Reusability::VALUES),
        FieldRule::scalar("stability").required().one_of(Stability::VALUES),
        FieldRule::scalar("owner").required(),
        FieldRule::scalar("sourceStandard").required(),
        FieldRule::list("dependencies", "dependency"),
        FieldRule::list("usedByProducts", "usedByProducts reference").pattern(PRODUCT_ID_PATTERN),
        FieldRule::scalar("createdAt").required(),
    ],
    sequential: Some(MODULE_PREFIX),
};

pub static PRODUCT_RULES: KindRules = KindRules {
    kind: RegistryKind::Products,
    fields: &[
        FieldRule::scalar("id").required().pattern(PRODUCT_ID_PATTERN).unique(),
        FieldRule::scalar("name").required(),
        FieldRule::scalar("pcl").required().pattern(PCL_PATTERN),
        FieldRule::list("domainTags", "domain tag")
            .required()
            .one_of(DomainTag::VALUES)
            .non_empty(),
        FieldRule::scalar("owner").required(),
        FieldRule::scalar("status").required().one_of(ProductStatus::VALUES),
        FieldRule::scalar("createdAt").required(),
    ],
    sequential: Some(PRODUCT_PREFIX),
};

pub static PROJECT_RULES: KindRules = KindRules {
    kind: RegistryKind::Projects,
    fields: &[
        FieldRule::scalar("ccpid").required().pattern(CCPID_PATTERN).unique(),
        FieldRule::scalar("name").required(),
        FieldRule::link("productId").pattern(PRODUCT_ID_PATTERN),
        FieldRule::scalar("domainCode").required().pattern(DOMAIN_CODE_PATTERN),
        FieldRule::scalar("classification")
            .required()
            .one_of(ProjectClassification::VALUES),
        FieldRule::scalar("woePrefix").pattern(DOMAIN_CODE_PATTERN),
        FieldRule::scalar("tracker").required().one_of(Tracker::VALUES),
        FieldRule::scalar("status").required().one_of(ProjectStatus::VALUES),
        FieldRule::scalar("createdAt").required(),
    ],
    sequential: None,
};

pub static STANDARD_RULES: KindRules = KindRules {
    kind: RegistryKind::Standards,
    fields: &[
        FieldRule::scalar("id").required().pattern(STANDARD_ID_PATTERN).unique(),
        FieldRule::scalar("catalogNumber")
            .required()
            .pattern(CATALOG_NUMBER_PATTERN)
            .unique(),
        FieldRule::scalar("name").required(),
        FieldRule::scalar("type").required().one_of(StandardType::VALUES),
        FieldRule::scalar("domain").required().one_of(StandardDomain::VALUES),
        FieldRule::scalar("version").required().pattern(VERSION_PATTERN),
        FieldRule::scalar("owner").required(),
        FieldRule::scalar("status").required().one_of(StandardStatus::VALUES),
        FieldRule::scalar("effective").required(),
        FieldRule::scalar("classification")
            .required()
            .one_of(Classification::VALUES),
        FieldRule::scalar("filename").required().pattern(FILENAME_PATTERN).unique(),
        FieldRule::scalar("createdAt").required(),
    ],
    sequential: None,
};

/// Rule table entry for a registry kind.
#[must_use]
pub fn rules_for(kind: RegistryKind) -> &'static KindRules {
    match kind {
        RegistryKind::EntityCodes => &ENTITY_CODE_RULES,
        RegistryKind::Modules => &MODULE_RULES,
        RegistryKind::Products => &PRODUCT_RULES,
        RegistryKind::Projects => &PROJECT_RULES,
        RegistryKind::Standards => &STANDARD_RULES,
    }
}

// ---------------------------------------------------------------------------
// Compiled rules
// ---------------------------------------------------------------------------

/// The rule table with every pattern compiled once.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    patterns: HashMap<RegistryKind, HashMap<&'static str, Regex>>,
}

impl RuleRegistry {
    /// Compile the patterns of every registry kind.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Pattern` if a pattern in the table does not compile.
    pub fn new() -> Result<Self, SchemaError> {
        let mut patterns = HashMap::new();
        for kind in RegistryKind::ALL {
            let compiled: &mut HashMap<&'static str, Regex> = patterns.entry(kind).or_default();
            for rule in rules_for(kind).fields {
                if let Some(pattern) = rule.pattern {
                    let regex = Regex::new(pattern).map_err(|source| SchemaError::Pattern {
                        kind: kind.to_string(),
                        field: rule.name,
                        source,
                    })?;
                    compiled.insert(rule.name, regex);
                }
            }
        }
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn rules(&self, kind: RegistryKind) -> &'static KindRules {
        rules_for(kind)
    }

    /// Whether `value` matches the pattern of `kind.field`. Fields without a
    /// pattern accept everything.
    #[must_use]
    pub fn is_match(&self, kind: RegistryKind, field: &str, value: &str) -> bool {
        self.patterns
            .get(&kind)
            .and_then(|compiled| compiled.get(field))
            .is_none_or(|regex| regex.is_match(value))
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.values().map(HashMap::len).sum()
    }
}
