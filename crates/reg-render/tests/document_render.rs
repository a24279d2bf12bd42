//! Whole-document rendering behaviour.

use pretty_assertions::assert_eq;
use reg_core::entities::{EntityCode, Module, Product, Project};
use reg_core::{Collection, Registries};
use reg_render::markers::{begin_marker, end_marker};
use reg_render::{Section, render};

const DOCUMENT: &str = "\
# Name Registry

Hand-written introduction that must survive rendering.

## Entity Codes
<!-- BEGIN:ENTITY_CODES -->
stale
<!-- END:ENTITY_CODES -->

## Products
<!-- BEGIN:PRODUCTS -->
<!-- END:PRODUCTS -->

## Modules
<!-- BEGIN:MODULES -->
<!-- END:MODULES -->

## UUID Crosswalk
<!-- BEGIN:UUID_CROSSWALK -->
<!-- END:UUID_CROSSWALK -->

## Projects
<!-- BEGIN:PROJECTS -->
<!-- END:PROJECTS -->

Footer.
";

fn product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: format!("Product {id}"),
        pcl: "PCL-1.1.1.1".into(),
        domain_tags: vec!["Operations".into()],
        owner: "ops".into(),
        status: "Active".into(),
        ..Product::default()
    }
}

fn registries(products: Vec<Product>) -> Registries {
    Registries {
        entity_codes: Some(Collection::new(vec![EntityCode {
            code: "PRJ".into(),
            name: "Project".into(),
            category: "Project Mgmt".into(),
            db_table: "projects".into(),
            status: "ACTIVE".into(),
            ccpid_status: "COMPLETE".into(),
            ..EntityCode::default()
        }])),
        modules: Some(Collection::new(vec![Module {
            id: "MOD-001".into(),
            slug: "auth-core".into(),
            name: "Auth Core".into(),
            scope: "Core".into(),
            reusability: "Global".into(),
            stability: "Stable".into(),
            owner: "platform".into(),
            source_standard: "4.2".into(),
            ..Module::default()
        }])),
        products: Some(Collection::new(products)),
        projects: Some(Collection::new(vec![Project {
            ccpid: "PRJ-X2M8KD-F".into(),
            name: "Portal".into(),
            product_id: Some("PRD-001".into()),
            domain_code: "WA-SS".into(),
            classification: "Product".into(),
            woe_prefix: Some("WA-SS".into()),
            status: "Active".into(),
            ..Project::default()
        }])),
        standards: Some(Collection::default()),
    }
}

/// Text between the markers of `section`.
fn section_text<'a>(document: &'a str, section: Section) -> &'a str {
    let begin = begin_marker(section.marker_name());
    let end = end_marker(section.marker_name());
    let start = document.find(&begin).unwrap() + begin.len();
    let stop = start + document[start..].find(&end).unwrap();
    &document[start..stop]
}

#[test]
fn rendering_twice_is_byte_identical() {
    let data = registries(vec![product("PRD-001")]);
    let once = render("doc.md", DOCUMENT, &data);
    let twice = render("doc.md", &once.text, &data);
    assert_eq!(once.text, twice.text);
    assert!(once.changed);
    assert!(!twice.changed);
    assert_eq!(twice.updated, Section::ALL.to_vec());
}

#[test]
fn text_outside_markers_is_preserved() {
    let rendered = render("doc.md", DOCUMENT, &registries(vec![])).text;
    assert!(rendered.starts_with("# Name Registry\n\nHand-written introduction"));
    assert!(rendered.ends_with("<!-- END:PROJECTS -->\n\nFooter.\n"));
    assert!(!rendered.contains("stale"));
}

#[test]
fn adding_a_product_only_changes_the_products_section() {
    let before = render("doc.md", DOCUMENT, &registries(vec![product("PRD-001")])).text;
    let after = render(
        "doc.md",
        DOCUMENT,
        &registries(vec![product("PRD-001"), product("PRD-002")]),
    )
    .text;

    assert!(section_text(&before, Section::Products).contains("**Total:** 1 products"));
    assert!(section_text(&after, Section::Products).contains("**Total:** 2 products"));
    for section in Section::ALL.into_iter().filter(|s| *s != Section::Products) {
        assert_eq!(
            section_text(&before, section),
            section_text(&after, section),
            "{section} changed"
        );
    }
}

#[test]
fn missing_crosswalk_markers_warn_once_and_render_the_rest() {
    let document = DOCUMENT.replace(
        "<!-- BEGIN:UUID_CROSSWALK -->\n<!-- END:UUID_CROSSWALK -->\n",
        "",
    );
    let outcome = render("doc.md", &document, &registries(vec![product("PRD-001")]));

    assert_eq!(outcome.report.len(), 1);
    assert!(outcome.report.is_success());
    assert_eq!(
        outcome.report.diagnostics()[0].message,
        "Markers for UUID_CROSSWALK not found; section left unchanged"
    );
    assert_eq!(
        outcome.updated,
        vec![
            Section::EntityCodes,
            Section::Products,
            Section::Modules,
            Section::Projects
        ]
    );
    assert!(outcome.text.contains("**Total:** 1 modules registered"));
}

#[test]
fn project_section_shows_linked_product() {
    let rendered = render("doc.md", DOCUMENT, &registries(vec![product("PRD-001")])).text;
    let projects = section_text(&rendered, Section::Projects);
    assert!(projects.contains("| PRJ-X2M8KD-F | Portal | PRD-001 | WA-SS | Product | WA-SS | Active |"));
    assert!(projects.ends_with("**Total:** 1 projects\n"));
}

#[test]
fn marker_text_inside_records_cannot_end_a_section() {
    let mut data = registries(vec![product("PRD-001")]);
    data.entity_codes = Some(Collection::new(vec![EntityCode {
        code: "CUS".into(),
        name: "Customer <!-- END:ENTITY_CODES --> tail".into(),
        category: "Customer & Org".into(),
        db_table: "customers".into(),
        status: "ACTIVE".into(),
        ccpid_status: "PENDING".into(),
        ..EntityCode::default()
    }]));

    let once = render("doc.md", DOCUMENT, &data);
    let twice = render("doc.md", &once.text, &data);

    assert_eq!(once.text, twice.text);
    assert!(!twice.changed);
    assert_eq!(once.text.matches("<!-- END:ENTITY_CODES -->").count(), 1);
    assert!(
        section_text(&once.text, Section::EntityCodes)
            .contains("Customer &lt;!-- END:ENTITY_CODES --> tail")
    );
}
