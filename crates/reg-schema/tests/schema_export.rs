//! Exported JSON Schemas accept what the validator accepts.

use reg_core::RegistryKind;
use reg_schema::{SchemaCatalog, SchemaError};
use serde_json::json;

fn catalog() -> SchemaCatalog {
    SchemaCatalog::new()
}

#[test]
fn valid_module_record_passes() {
    let record = json!({
        "id": "MOD-001",
        "slug": "auth-core",
        "name": "Auth Core",
        "scope": "UI",
        "reusability": "Portfolio",
        "stability": "Beta",
        "owner": "platform",
        "sourceStandard": "4.2",
        "dependencies": [],
        "usedByProducts": ["PRD-001"],
        "createdAt": "2025-02-01"
    });
    catalog().validate(RegistryKind::Modules, &record).unwrap();
}

#[test]
fn project_without_product_link_passes() {
    let record = json!({
        "ccpid": "PRJ-X2M8KD-F",
        "name": "Client Portal",
        "productId": null,
        "domainCode": "WA-SS",
        "classification": "One-off",
        "woePrefix": "WA-SS",
        "tracker": "Linear",
        "status": "Active",
        "createdAt": "2025-04-01"
    });
    catalog().validate(RegistryKind::Projects, &record).unwrap();
}

#[test]
fn bad_enum_and_pattern_are_rejected() {
    let record = json!({
        "id": "PRD-1",
        "name": "Ledger",
        "pcl": "PCL-1.2.3.4",
        "domainTags": ["Gardening"],
        "owner": "finance",
        "status": "Active",
        "createdAt": "2025-03-01"
    });
    let error = catalog()
        .validate(RegistryKind::Products, &record)
        .unwrap_err();
    let errors = match error {
        SchemaError::ValidationFailed { errors } => errors,
        other => panic!("expected validation failure, got {other}"),
    };
    assert_eq!(errors.len(), 2, "{errors:?}");
}

#[test]
fn missing_required_field_is_rejected() {
    let record = json!({ "code": "CUS" });
    assert!(catalog().validate(RegistryKind::EntityCodes, &record).is_err());
}

#[test]
fn registry_schema_validates_whole_files() {
    let schema = catalog().registry_schema(RegistryKind::Standards).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should compile");

    let file = json!([{
        "id": "STD-ENG-001",
        "catalogNumber": "4.2",
        "name": "Module Standard",
        "type": "Standard",
        "domain": "Engineering",
        "version": "v1.0",
        "owner": "engineering",
        "status": "Active",
        "effective": "2025-01-01",
        "classification": "INTERNAL",
        "filename": "STD-ENG-001 CYBERCUBE-Module-Standard.md",
        "createdAt": "2025-01-01"
    }]);
    assert!(validator.is_valid(&file));
    assert!(!validator.is_valid(&json!({})));
}
