use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_CONFIG: &str = r#"
[framework]
fallback_vendor = "Mage"

[framework.models]
catalog = "Mage_Catalog_Model"

[framework.helpers]
catalog = "Mage_Catalog_Helper"

[framework.rewrites.models]
"catalog/product" = "Acme_Catalog_Model_Product"

[[types]]
name = "Mage_Catalog_Model_Abstract"
extends = "Mage_Core_Model_Abstract"
"#;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write a config file into the temp dir
    pub fn config(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(".mage-mock.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Command running inside the temp dir, without colors or env config
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mage-mock").expect("Failed to find binary");
        cmd.current_dir(self.temp_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("MAGE_MOCK_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
