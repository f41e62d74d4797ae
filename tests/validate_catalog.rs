//! Integration tests for the catalog consistency rules.

use pipeline_core::validate;

#[test]
fn shipped_catalog_is_consistent() {
    let errors = validate::validate_catalog();
    assert!(errors.is_empty(), "Expected no catalog errors, got: {:?}", errors);
}

#[test]
fn registry_rules_pass() {
    assert!(validate::registry_rules::validate_registry().is_empty());
}

#[test]
fn template_rules_pass() {
    assert!(validate::template_rules::validate_templates().is_empty());
}
