//! Cross-reference resolution between registries.
//!
//! Runs after every file has been validated and checks that foreign-key-like
//! fields resolve to records of another registry. Each (source, target) pair is
//! resolved only when both collections are available; otherwise the pair is
//! skipped with a single warning.

use reg_core::entities::{Module, Product, Project, Standard};
use reg_core::{Collection, Diagnostic, RegistryKind, Registries, Report};
use tracing::{debug, warn};

use crate::rules::RuleRegistry;

/// File label used for diagnostics that span registries.
pub const CROSS_REF: &str = "cross-ref";

/// Resolve every cross-registry reference in `registries`.
#[must_use]
pub fn resolve(rules: &RuleRegistry, registries: &Registries) -> Report {
    let mut report = Report::new();

    match (&registries.modules, &registries.products) {
        (Some(modules), Some(products)) => module_products(modules, products, &mut report),
        _ => skip(RegistryKind::Modules, RegistryKind::Products, registries, &mut report),
    }

    match (&registries.modules, &registries.standards) {
        (Some(modules), Some(standards)) => module_standards(modules, standards, &mut report),
        _ => skip(RegistryKind::Modules, RegistryKind::Standards, registries, &mut report),
    }

    match (&registries.projects, &registries.products) {
        (Some(projects), Some(products)) => {
            project_products(rules, projects, products, &mut report);
        }
        _ => skip(RegistryKind::Projects, RegistryKind::Products, registries, &mut report),
    }

    debug!(errors = report.error_count(), "cross-references checked");
    report
}

fn skip(source: RegistryKind, target: RegistryKind, registries: &Registries, report: &mut Report) {
    let missing: Vec<&str> = registries
        .unavailable()
        .into_iter()
        .filter(|kind| *kind == source || *kind == target)
        .map(RegistryKind::file_name)
        .collect();
    let message = format!(
        "Skipping {} -> {} references ({} failed to load)",
        source.file_name(),
        target.file_name(),
        missing.join(", ")
    );
    warn!("{message}");
    report.push(Diagnostic::warn(CROSS_REF, message));
}

fn subject(kind: RegistryKind, id: &str) -> String {
    if id.is_empty() {
        kind.missing_id_placeholder().to_string()
    } else {
        id.to_string()
    }
}

/// `Module.usedByProducts` entries name existing products.
fn module_products(
    modules: &Collection<Module>,
    products: &Collection<Product>,
    report: &mut Report,
) {
    for module in modules {
        for product in &module.used_by_products {
            if !products.contains_id(product) {
                report.push(
                    Diagnostic::error(
                        CROSS_REF,
                        format!(
                            "references product '{product}' which does not exist in products.json"
                        ),
                    )
                    .with_subject(subject(RegistryKind::Modules, &module.id)),
                );
            }
        }
    }
}

/// `Module.sourceStandard`, when set, equals the catalog number of a standard.
fn module_standards(
    modules: &Collection<Module>,
    standards: &Collection<Standard>,
    report: &mut Report,
) {
    for module in modules {
        let source = module.source_standard.as_str();
        if source.is_empty() {
            continue;
        }
        if !standards.iter().any(|standard| standard.catalog_number == source) {
            report.push(
                Diagnostic::error(
                    CROSS_REF,
                    format!(
                        "references sourceStandard '{source}' which does not exist in standards.json"
                    ),
                )
                .with_subject(subject(RegistryKind::Modules, &module.id)),
            );
        }
    }
}

/// `Project.productId`, when present and well formed, names an existing product.
///
/// Malformed ids are already reported by the validator and are not resolved.
fn project_products(
    rules: &RuleRegistry,
    projects: &Collection<Project>,
    products: &Collection<Product>,
    report: &mut Report,
) {
    let file = RegistryKind::Projects.file_name();
    for project in projects {
        let Some(product_id) = project.product_id.as_deref() else {
            continue;
        };
        if !rules.is_match(RegistryKind::Projects, "productId", product_id) {
            continue;
        }
        if !products.contains_id(product_id) {
            report.push(
                Diagnostic::error(
                    file,
                    format!(
                        "references productId '{product_id}' which does not exist in products.json"
                    ),
                )
                .with_subject(subject(RegistryKind::Projects, &project.ccpid)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> RuleRegistry {
        RuleRegistry::new().unwrap()
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            ..Product::default()
        }
    }

    fn module(id: &str, used_by: &[&str], source: &str) -> Module {
        Module {
            id: id.into(),
            used_by_products: used_by.iter().map(ToString::to_string).collect(),
            source_standard: source.into(),
            ..Module::default()
        }
    }

    fn standard(catalog: &str) -> Standard {
        Standard {
            catalog_number: catalog.into(),
            ..Standard::default()
        }
    }

    fn complete() -> Registries {
        Registries {
            entity_codes: Some(Collection::default()),
            modules: Some(Collection::new(vec![module("MOD-001", &["PRD-001"], "4.2")])),
            products: Some(Collection::new(vec![product("PRD-001")])),
            projects: Some(Collection::default()),
            standards: Some(Collection::new(vec![standard("4.2")])),
        }
    }

    #[test]
    fn resolved_references_are_silent() {
        assert!(resolve(&rules(), &complete()).is_empty());
    }

    #[test]
    fn unknown_product_and_standard_are_errors() {
        let mut registries = complete();
        registries.modules = Some(Collection::new(vec![module("MOD-001", &["PRD-002"], "9.9")]));
        let messages: Vec<String> = resolve(&rules(), &registries)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "ERROR [cross-ref]: MOD-001 references product 'PRD-002' which does not exist in products.json",
                "ERROR [cross-ref]: MOD-001 references sourceStandard '9.9' which does not exist in standards.json",
            ]
        );
    }

    #[test]
    fn empty_source_standard_is_not_resolved() {
        let mut registries = complete();
        registries.modules = Some(Collection::new(vec![module("MOD-001", &[], "")]));
        assert!(resolve(&rules(), &registries).is_empty());
    }

    #[test]
    fn malformed_project_product_id_is_left_to_the_validator() {
        let mut registries = complete();
        registries.projects = Some(Collection::new(vec![Project {
            ccpid: "PRJ-ABCDEF-G".into(),
            product_id: Some("product-one".into()),
            ..Project::default()
        }]));
        assert!(resolve(&rules(), &registries).is_empty());
    }

    #[test]
    fn unavailable_products_skip_two_pairs_with_one_warning_each() {
        let mut registries = complete();
        registries.products = None;
        let report = resolve(&rules(), &registries);
        assert!(report.is_success());
        let messages: Vec<&str> = report.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Skipping modules.json -> products.json references (products.json failed to load)",
                "Skipping projects.json -> products.json references (products.json failed to load)",
            ]
        );
    }
}
