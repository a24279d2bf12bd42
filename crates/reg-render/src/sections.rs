//! Generated document sections.
//!
//! Every renderer is a pure function of its collections; the same input
//! always produces the same Markdown.

use std::fmt;

use reg_core::entities::{EntityCode, Module, Product, Project};
use reg_core::enums::CodeStatus;
use reg_core::{Collection, Registries};
use serde::Serialize;

/// A marker-delimited section of the registry document, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    EntityCodes,
    Products,
    Modules,
    UuidCrosswalk,
    Projects,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::EntityCodes,
        Self::Products,
        Self::Modules,
        Self::UuidCrosswalk,
        Self::Projects,
    ];

    /// Name used inside the `BEGIN:`/`END:` markers.
    #[must_use]
    pub const fn marker_name(self) -> &'static str {
        match self {
            Self::EntityCodes => "ENTITY_CODES",
            Self::Products => "PRODUCTS",
            Self::Modules => "MODULES",
            Self::UuidCrosswalk => "UUID_CROSSWALK",
            Self::Projects => "PROJECTS",
        }
    }

    /// Content of the section, or `None` when its source registry is unavailable.
    #[must_use]
    pub fn render(self, registries: &Registries) -> Option<String> {
        match self {
            Self::EntityCodes => registries.entity_codes.as_ref().map(entity_codes),
            Self::Products => registries.products.as_ref().map(products),
            Self::Modules => registries.modules.as_ref().map(modules),
            Self::UuidCrosswalk => registries.entity_codes.as_ref().map(uuid_crosswalk),
            Self::Projects => registries.projects.as_ref().map(projects),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker_name())
    }
}

/// Table cell text. `|` is escaped and line breaks are flattened so a record
/// cannot break its row; `<!--` is entity-escaped so it cannot forge a marker.
fn cell(value: &str) -> String {
    value
        .replace("<!--", "&lt;!--")
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

fn dash_if_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => cell(v),
        _ => "—".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

#[must_use]
pub fn entity_codes(codes: &Collection<EntityCode>) -> String {
    let mut lines = vec![
        "| Code | Entity Name | Category | Status | DB Table |".to_string(),
        "|------|-------------|----------|--------|----------|".to_string(),
    ];
    for code in codes {
        lines.push(format!(
            "| **{}** | {} | {} | {} | `{}` |",
            cell(&code.code),
            cell(&code.name),
            cell(code.category.as_str()),
            cell(code.status.as_str()),
            cell(&code.db_table),
        ));
    }

    let active = codes.iter().filter(|c| c.status == CodeStatus::Active).count();
    let deprecated = codes
        .iter()
        .filter(|c| c.status == CodeStatus::Deprecated)
        .count();
    let deprecated_note = if deprecated > 0 {
        format!(", {deprecated} DEPRECATED")
    } else {
        String::new()
    };
    lines.push(String::new());
    lines.push(format!(
        "**Total:** {} entity codes ({active} ACTIVE{deprecated_note})",
        codes.len()
    ));
    lines.join("\n")
}

#[must_use]
pub fn products(products: &Collection<Product>) -> String {
    if products.is_empty() {
        return [
            "| ID | Product Name | PCL Code | Domain Tags | Criticality | Owner | Status |",
            "|----|-------------|----------|-------------|-------------|-------|--------|",
            "| *(none registered yet — add to `registries/products.json`)* | | | | | | |",
            "",
            "**Total:** 0 products",
        ]
        .join("\n");
    }

    let mut lines = vec![
        "| ID | Product Name | PCL Code | Domain Tags | Owner | Status |".to_string(),
        "|----|-------------|----------|-------------|-------|--------|".to_string(),
    ];
    for product in products {
        let tags: Vec<&str> = product.domain_tags.iter().map(|tag| tag.as_str()).collect();
        lines.push(format!(
            "| {} | {} | `{}` | {} | {} | {} |",
            cell(&product.id),
            cell(&product.name),
            cell(&product.pcl),
            cell(&tags.join(", ")),
            cell(&product.owner),
            cell(product.status.as_str()),
        ));
    }
    lines.push(String::new());
    lines.push(format!("**Total:** {} products", products.len()));
    lines.join("\n")
}

#[must_use]
pub fn modules(modules: &Collection<Module>) -> String {
    let mut lines = vec![
        "| ID | Slug | Name | Scope | Reusability | Stability | Owner | Source Std |".to_string(),
        "|----|------|------|-------|-------------|-----------|-------|-----------|".to_string(),
    ];
    for module in modules {
        lines.push(format!(
            "| {} | `{}` | {} | {} | {} | {} | {} | {} |",
            cell(&module.id),
            cell(&module.slug),
            cell(&module.name),
            cell(module.scope.as_str()),
            cell(module.reusability.as_str()),
            cell(module.stability.as_str()),
            cell(&module.owner),
            cell(&module.source_standard),
        ));
    }
    lines.push(String::new());
    lines.push(format!("**Total:** {} modules registered", modules.len()));
    lines.join("\n")
}

/// Entity codes ordered by CC-PID rollout: complete, migration ready,
/// pending, then anything else. Ties keep file order.
#[must_use]
pub fn uuid_crosswalk(codes: &Collection<EntityCode>) -> String {
    let mut sorted: Vec<&EntityCode> = codes.iter().collect();
    sorted.sort_by_key(|code| code.ccpid_status.priority());

    let mut lines = vec![
        "| Entity | CC-PID Code | UUID Column | CC-PID Column | CC-PID Status |".to_string(),
        "|--------|-------------|-------------|---------------|---------------|".to_string(),
    ];
    for code in sorted {
        lines.push(format!(
            "| {} | {} | `id` (UUIDv7) | `public_id` | {} |",
            cell(&code.name),
            cell(&code.code),
            cell(code.ccpid_status.as_str()),
        ));
    }
    lines.join("\n")
}

const PROJECTS_HEADER: &str =
    "| CC-PID | Project Name | Product (PRD) | Domain Code | Classification | WOE Prefix | Status |";
const PROJECTS_RULE: &str =
    "|--------|-------------|---------------|-------------|----------------|------------|--------|";

#[must_use]
pub fn projects(projects: &Collection<Project>) -> String {
    if projects.is_empty() {
        return [
            PROJECTS_HEADER,
            PROJECTS_RULE,
            "| *(none registered yet — add to `registries/projects.json`)* | | | | | | |",
            "",
            "**Total:** 0 projects",
        ]
        .join("\n");
    }

    let mut lines = vec![PROJECTS_HEADER.to_string(), PROJECTS_RULE.to_string()];
    for project in projects {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} |",
            cell(&project.ccpid),
            cell(&project.name),
            dash_if_empty(project.product_id.as_deref()),
            cell(&project.domain_code),
            cell(project.classification.as_str()),
            dash_if_empty(project.woe_prefix.as_deref()),
            cell(project.status.as_str()),
        ));
    }
    lines.push(String::new());
    lines.push(format!("**Total:** {} projects", projects.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reg_core::enums::CcpidStatus;

    fn code(code: &str, status: &str, ccpid: &str) -> EntityCode {
        EntityCode {
            code: code.into(),
            name: format!("{code} entity"),
            category: "Project Mgmt".into(),
            db_table: code.to_lowercase(),
            status: status.into(),
            ccpid_status: CcpidStatus::from(ccpid),
            ..EntityCode::default()
        }
    }

    #[test]
    fn entity_total_mentions_deprecated_only_when_present() {
        let active = Collection::new(vec![code("PRJ", "ACTIVE", "COMPLETE")]);
        assert!(entity_codes(&active).ends_with("**Total:** 1 entity codes (1 ACTIVE)"));

        let mixed = Collection::new(vec![
            code("PRJ", "ACTIVE", "COMPLETE"),
            code("TSK", "DEPRECATED", "PENDING"),
        ]);
        assert!(
            entity_codes(&mixed).ends_with("**Total:** 2 entity codes (1 ACTIVE, 1 DEPRECATED)")
        );
    }

    #[test]
    fn cells_neutralise_comment_openers() {
        assert_eq!(
            cell("Customer <!-- END:ENTITY_CODES --> tail"),
            "Customer &lt;!-- END:ENTITY_CODES --> tail"
        );
        assert_eq!(cell("a|b\nc"), "a\\|b c");
    }

    #[test]
    fn entity_rows_bold_the_code() {
        let rendered = entity_codes(&Collection::new(vec![code("PRJ", "ACTIVE", "COMPLETE")]));
        assert!(rendered.contains("| **PRJ** | PRJ entity | Project Mgmt | ACTIVE | `prj` |"));
    }

    #[test]
    fn crosswalk_is_stable_sorted_by_rollout() {
        let codes = Collection::new(vec![
            code("AAA", "ACTIVE", "PENDING"),
            code("BBB", "ACTIVE", "LATER"),
            code("CCC", "ACTIVE", "COMPLETE"),
            code("DDD", "ACTIVE", "MIGRATION READY"),
            code("EEE", "ACTIVE", "COMPLETE"),
        ]);
        let order: Vec<String> = uuid_crosswalk(&codes)
            .lines()
            .skip(2)
            .map(|line| line.split(" | ").nth(1).unwrap_or_default().to_string())
            .collect();
        assert_eq!(order, vec!["CCC", "EEE", "DDD", "AAA", "BBB"]);
    }

    #[test]
    fn empty_products_render_placeholder() {
        let rendered = products(&Collection::default());
        assert!(rendered.starts_with("| ID | Product Name | PCL Code | Domain Tags | Criticality |"));
        assert!(rendered.ends_with("**Total:** 0 products"));
    }

    #[test]
    fn product_tags_are_comma_joined() {
        let product = Product {
            id: "PRD-001".into(),
            name: "Ledger".into(),
            pcl: "PCL-1.2.3.4".into(),
            domain_tags: vec!["Finance".into(), "Security".into()],
            owner: "finance".into(),
            status: "Active".into(),
            ..Product::default()
        };
        let rendered = products(&Collection::new(vec![product]));
        assert!(rendered.contains("| PRD-001 | Ledger | `PCL-1.2.3.4` | Finance, Security | finance | Active |"));
        assert!(rendered.ends_with("**Total:** 1 products"));
    }

    #[test]
    fn project_links_default_to_dash() {
        let project = Project {
            ccpid: "PRJ-X2M8KD-F".into(),
            name: "Portal".into(),
            product_id: None,
            domain_code: "WA-SS".into(),
            classification: "One-off".into(),
            woe_prefix: Some(String::new()),
            status: "Active".into(),
            ..Project::default()
        };
        let rendered = projects(&Collection::new(vec![project]));
        assert!(rendered.contains("| PRJ-X2M8KD-F | Portal | — | WA-SS | One-off | — | Active |"));
    }

    #[test]
    fn pipes_in_record_text_are_escaped() {
        let module = Module {
            id: "MOD-001".into(),
            slug: "auth".into(),
            name: "Auth | Identity".into(),
            ..Module::default()
        };
        let rendered = modules(&Collection::new(vec![module]));
        assert!(rendered.contains("| Auth \\| Identity |"));
        assert!(rendered.ends_with("**Total:** 1 modules registered"));
    }
}
