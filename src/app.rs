//! Application bootstrap used by test cases before any mock is created.

use crate::config::Config;
use crate::logging;
use crate::resolver::ConfigResolver;
use crate::runtime::dispatch::{DataObjectAccessors, DispatchHandler};
use crate::runtime::factory::MockFactory;
use crate::runtime::types::TypeRegistry;
use crate::{MockError, Result};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Options passed to the bootstrap.
pub type AppOptions = Map<String, Value>;

/// Option key naming a config file to load instead of the default one.
pub const CONFIG_PATH_OPTION: &str = "config_path";

pub const DEFAULT_STORE: &str = "default";
pub const DEFAULT_RUN_TYPE: &str = "store";

/// Scope the application is started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    Store,
    Group,
    Website,
}

impl FromStr for RunType {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store" => Ok(RunType::Store),
            "group" => Ok(RunType::Group),
            "website" => Ok(RunType::Website),
            other => Err(MockError::Bootstrap(format!("unknown run type '{other}'"))),
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunType::Store => "store",
            RunType::Group => "group",
            RunType::Website => "website",
        })
    }
}

/// A bootstrapped application context.
#[derive(Debug)]
pub struct App {
    store: String,
    run_type: RunType,
    options: AppOptions,
    config: Config,
    factory: MockFactory,
}

impl App {
    /// Initialize an application over `types`.
    ///
    /// A store or run type left at its default is taken from the config's
    /// `[app]` table when that sets one.
    pub fn init(
        store: &str,
        run_type: &str,
        options: AppOptions,
        types: Arc<TypeRegistry>,
    ) -> Result<Self> {
        let config = match options.get(CONFIG_PATH_OPTION) {
            Some(Value::String(path)) => Config::load_from(Path::new(path))?,
            Some(other) => {
                return Err(MockError::Bootstrap(format!(
                    "option '{CONFIG_PATH_OPTION}' must be a string, got {other}"
                )))
            }
            None => Config::load()?,
        };

        let store = configured_or(store, DEFAULT_STORE, config.app.store.as_deref())
            .trim()
            .to_string();
        if store.is_empty() {
            return Err(MockError::Bootstrap("store code is empty".to_string()));
        }
        let run_type: RunType =
            configured_or(run_type, DEFAULT_RUN_TYPE, config.app.run_type.as_deref()).parse()?;

        declare_host_types(&config, &types)?;

        let resolver = ConfigResolver::from_config(&config.framework);
        let factory = MockFactory::new(types, Arc::new(resolver));
        logging::log_app_bootstrap(&store, &run_type.to_string());

        Ok(Self {
            store,
            run_type,
            options,
            config,
            factory,
        })
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn run_type(&self) -> RunType {
        self.run_type
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn factory(&self) -> &MockFactory {
        &self.factory
    }
}

/// Declare the config's host types, skipping names that already exist.
pub fn declare_host_types(config: &Config, types: &TypeRegistry) -> Result<()> {
    for host in &config.types {
        if types.is_defined(&host.name) {
            tracing::debug!(name = host.name.as_str(), "Host type already declared");
            continue;
        }
        let handler = host
            .data_object
            .then(|| Arc::new(DataObjectAccessors) as Arc<dyn DispatchHandler>);
        types.declare_host_type(&host.name, host.extends.as_deref(), handler)?;
    }
    Ok(())
}

fn configured_or<'a>(requested: &'a str, default: &str, configured: Option<&'a str>) -> &'a str {
    match configured {
        Some(value) if requested.trim().eq_ignore_ascii_case(default) => value,
        _ => requested,
    }
}

/// Settings a `bootstrap` call asked for.
#[derive(Debug, Clone, PartialEq)]
struct BootstrapRequest {
    store: String,
    run_type: String,
    options: AppOptions,
}

impl BootstrapRequest {
    fn new(store: &str, run_type: &str, options: &AppOptions) -> Self {
        Self {
            store: store.trim().to_string(),
            run_type: run_type.trim().to_ascii_lowercase(),
            options: options.clone(),
        }
    }
}

static CURRENT_APP: Lazy<Mutex<Option<(BootstrapRequest, Arc<App>)>>> =
    Lazy::new(|| Mutex::new(None));

/// Bootstrap the process-wide application over the global type registry.
///
/// The first successful call wins; later calls return the same application.
pub fn bootstrap(store: &str, run_type: &str, options: AppOptions) -> Result<Arc<App>> {
    let mut current = CURRENT_APP
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let request = BootstrapRequest::new(store, run_type, &options);

    if let Some((first, app)) = current.as_ref() {
        if *first != request {
            tracing::warn!(
                store,
                run_type,
                options_differ = first.options != request.options,
                active_store = app.store(),
                active_run_type = %app.run_type(),
                "Application already bootstrapped with different settings"
            );
        }
        logging::log_app_reused(app.store(), &app.run_type().to_string());
        return Ok(Arc::clone(app));
    }

    let app = Arc::new(App::init(store, run_type, options, TypeRegistry::global())?);
    *current = Some((request, Arc::clone(&app)));
    Ok(app)
}
