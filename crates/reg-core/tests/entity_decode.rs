//! Decoding of hand-edited registry records into typed entities.

use pretty_assertions::assert_eq;
use reg_core::entities::{EntityCode, Module, Product, Project, Standard};
use reg_core::enums::{CcpidStatus, CodeStatus, DomainTag, ModuleScope, StandardType};
use rstest::rstest;
use serde_json::json;

#[test]
fn entity_code_decodes_registry_keys() {
    let record: EntityCode = serde_json::from_value(json!({
        "code": "CUS",
        "name": "Customer",
        "category": "Customer & Org",
        "description": "Customer organisations",
        "dbTable": "customers",
        "status": "ACTIVE",
        "ccpidStatus": "MIGRATION READY",
        "createdAt": "2025-01-10"
    }))
    .unwrap();

    assert_eq!(record.code, "CUS");
    assert_eq!(record.db_table, "customers");
    assert_eq!(record.status, CodeStatus::Active);
    assert_eq!(record.ccpid_status, CcpidStatus::MigrationReady);
}

#[test]
fn module_lists_default_to_empty() {
    let record: Module = serde_json::from_value(json!({
        "id": "MOD-001",
        "slug": "auth-core",
        "scope": "UI"
    }))
    .unwrap();

    assert_eq!(record.scope, ModuleScope::Ui);
    assert!(record.dependencies.is_empty());
    assert!(record.used_by_products.is_empty());
}

#[rstest]
#[case(json!(null), "")]
#[case(json!(7), "7")]
#[case(json!(true), "true")]
#[case(json!("PRD-001"), "PRD-001")]
fn product_id_accepts_any_scalar(#[case] id: serde_json::Value, #[case] expected: &str) {
    let record: Product = serde_json::from_value(json!({ "id": id })).unwrap();
    assert_eq!(record.id, expected);
}

#[test]
fn product_tags_outside_vocabulary_are_kept() {
    let record: Product = serde_json::from_value(json!({
        "id": "PRD-001",
        "domainTags": ["Security", "Gardening", "Other"]
    }))
    .unwrap();

    assert_eq!(
        record.domain_tags,
        vec![
            DomainTag::Security,
            DomainTag::Other("Gardening".into()),
            DomainTag::Unlisted,
        ]
    );
}

#[test]
fn product_tags_that_are_not_a_list_decode_empty() {
    let record: Product = serde_json::from_value(json!({ "domainTags": "Security" })).unwrap();
    assert!(record.domain_tags.is_empty());
}

#[test]
fn project_optional_links_distinguish_null_from_present() {
    let unlinked: Project = serde_json::from_value(json!({
        "ccpid": "PRJ-ABCDEF-G",
        "productId": null
    }))
    .unwrap();
    assert_eq!(unlinked.product_id, None);
    assert_eq!(unlinked.woe_prefix, None);

    let linked: Project = serde_json::from_value(json!({
        "ccpid": "PRJ-ABCDEF-G",
        "productId": "PRD-002",
        "woePrefix": "CS-ER"
    }))
    .unwrap();
    assert_eq!(linked.product_id.as_deref(), Some("PRD-002"));
    assert_eq!(linked.woe_prefix.as_deref(), Some("CS-ER"));
}

#[test]
fn project_serialization_omits_absent_links() {
    let project = Project {
        ccpid: "PRJ-ABCDEF-G".into(),
        ..Project::default()
    };
    let value = serde_json::to_value(&project).unwrap();
    assert!(value.get("productId").is_none());
    assert!(value.get("woePrefix").is_none());
}

#[test]
fn standard_type_uses_reserved_key() {
    let record: Standard = serde_json::from_value(json!({
        "id": "STD-GOV-001",
        "catalogNumber": "1.1",
        "type": "Policy"
    }))
    .unwrap();
    assert_eq!(record.kind, StandardType::Policy);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["type"], json!("Policy"));
    assert_eq!(value["catalogNumber"], json!("1.1"));
}
