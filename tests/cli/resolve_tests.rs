use crate::common::{TestContext, SAMPLE_CONFIG};
use predicates::prelude::*;

#[test]
fn test_resolve_model_from_default_config_file() {
    let ctx = TestContext::new();
    ctx.config(SAMPLE_CONFIG);

    ctx.command()
        .args(["resolve", "catalog/category"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "catalog/category => Mage_Catalog_Model_Category",
        ));
}

#[test]
fn test_resolve_uses_rewrites_and_fallback() {
    let ctx = TestContext::new();
    let config = ctx.config(SAMPLE_CONFIG);

    ctx.command()
        .args(["resolve", "catalog/product", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme_Catalog_Model_Product"));

    ctx.command()
        .args(["resolve", "sales/order_item", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mage_Sales_Model_Order_Item"));
}

#[test]
fn test_resolve_helper() {
    let ctx = TestContext::new();
    ctx.config(SAMPLE_CONFIG);

    ctx.command()
        .args(["resolve", "catalog", "--helper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mage_Catalog_Helper_Data"));
}

#[test]
fn test_types_lists_host_and_config_types() {
    let ctx = TestContext::new();
    ctx.config(SAMPLE_CONFIG);

    ctx.command()
        .arg("types")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Mage_Catalog_Model_Abstract -> Mage_Core_Model_Abstract -> Varien_Object",
            )
            .and(predicate::str::contains("Mage_Core_Helper_Abstract")),
        );
}
