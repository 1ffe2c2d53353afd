/// Integration tests for CLI error handling
use crate::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_definition_rejects_injected_name() {
    TestContext::new()
        .command()
        .args(["definition", "Foo { public function x() {} }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid type name"));
}

#[test]
fn test_definition_with_unknown_parent() {
    TestContext::new()
        .command()
        .args(["definition", "MockChild", "--extends", "Missing_Parent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parent type 'Missing_Parent' is not defined"));
}

#[test]
fn test_resolve_unknown_group() {
    TestContext::new()
        .command()
        .args(["resolve", "sales/order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot resolve model short name 'sales/order'"));
}

#[test]
fn test_resolve_with_missing_config_file() {
    TestContext::new()
        .command()
        .args(["resolve", "catalog/product", "--config", "/nonexistent/.mage-mock.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_is_reported() {
    let ctx = TestContext::new();
    ctx.config("[framework\nmodels = 1");

    ctx.command()
        .arg("types")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
