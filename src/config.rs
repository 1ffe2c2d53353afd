use crate::logging;
use crate::{MockError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".mage-mock.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub framework: FrameworkConfig,
    /// Host types mocks may extend, in declaration order
    #[serde(default)]
    pub types: Vec<HostTypeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Store code used when a test case does not override it
    #[serde(default)]
    pub store: Option<String>,
    /// Run type (`store`, `group` or `website`)
    #[serde(default)]
    pub run_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FrameworkConfig {
    /// Vendor used to derive prefixes for unconfigured groups (e.g. "Mage")
    #[serde(default)]
    pub fallback_vendor: Option<String>,
    /// Model group -> class prefix
    #[serde(default)]
    pub models: HashMap<String, String>,
    /// Helper group -> class prefix
    #[serde(default)]
    pub helpers: HashMap<String, String>,
    #[serde(default)]
    pub rewrites: RewriteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RewriteConfig {
    /// Full short name -> replacement class
    #[serde(default)]
    pub models: HashMap<String, String>,
    #[serde(default)]
    pub helpers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostTypeConfig {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    /// Answer `getX`/`setX`/`hasX`/`unsX` like a data object
    #[serde(default)]
    pub data_object: bool,
}

impl Config {
    /// Load configuration from a file in the project root
    pub fn load() -> Result<Self> {
        let config_path = Path::new(DEFAULT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        logging::log_loading_config(&config_path.to_string_lossy());

        let content = fs::read_to_string(config_path).map_err(|e| {
            MockError::Config(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            MockError::Config(msg) => {
                MockError::Config(format!("Failed to parse TOML config from {:?}: {}", config_path, msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MockError::Config(e.to_string()))
    }
}
