use crate::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("resolve")
                .and(predicate::str::contains("definition"))
                .and(predicate::str::contains("types")),
        );
}

#[test]
fn test_version_flag() {
    TestContext::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mage-mock"));
}

#[test]
fn test_completions_for_bash() {
    TestContext::new()
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mage-mock"));
}
