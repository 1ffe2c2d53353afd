use crate::common::{TestContext, SAMPLE_CONFIG};
use predicates::prelude::*;

#[test]
fn test_definition_renders_intercepting_type() {
    TestContext::new()
        .command()
        .args(["definition", "MockCustomer", "--extends", "Varien_Object"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("type MockCustomer extends Varien_Object {")
                .and(predicate::str::contains("fn mockFunction(name, value)"))
                .and(predicate::str::contains("is-a: MockCustomer -> Varien_Object")),
        );
}

#[test]
fn test_definition_without_interception() {
    TestContext::new()
        .command()
        .args(["definition", "Shell", "--no-intercept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type Shell {}"));
}

#[test]
fn test_definition_can_extend_config_types() {
    let ctx = TestContext::new();
    ctx.config(SAMPLE_CONFIG);

    ctx.command()
        .args([
            "definition",
            "Mage_Catalog_Model_Product",
            "--extends",
            "Mage_Catalog_Model_Abstract",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mage_Catalog_Model_Product -> Mage_Catalog_Model_Abstract -> Mage_Core_Model_Abstract -> Varien_Object",
        ));
}
