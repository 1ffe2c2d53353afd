//! Test-class bootstrap for suites that use `mage-mock`.
//!
//! Implement [`TestCase`] on a marker type per test class, override the
//! store, run type or options where needed, and call
//! [`set_up_before_class`] (or [`TestCase::mock_factory`]) at the top of
//! each test. The application is bootstrapped once per class; the framework
//! application itself is process-wide, so the first class to bootstrap
//! decides its settings.

use mage_mock::app::{self, App, AppOptions, DEFAULT_RUN_TYPE, DEFAULT_STORE};
use mage_mock::{MockFactory, Result};
use once_cell::sync::Lazy;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub use mage_mock::app::CONFIG_PATH_OPTION;

/// Overridable bootstrap parameters of a test class.
pub trait TestCase: 'static {
    /// Store code, `"default"` unless overridden. A class that keeps the
    /// default gets the config's `[app] store` when one is set.
    fn store() -> String {
        DEFAULT_STORE.to_string()
    }

    /// Run type, `"store"` unless overridden or set in `[app] run_type`.
    fn run_type() -> String {
        DEFAULT_RUN_TYPE.to_string()
    }

    /// Bootstrap options, empty unless overridden.
    fn options() -> AppOptions {
        AppOptions::new()
    }

    /// Bootstrap if needed and return the application's mock factory.
    fn mock_factory() -> Result<MockFactory>
    where
        Self: Sized,
    {
        Ok(set_up_before_class::<Self>()?.factory().clone())
    }
}

static SET_UP_CLASSES: Lazy<Mutex<HashMap<TypeId, Arc<App>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Bootstrap the application for `T`, once per test class.
pub fn set_up_before_class<T: TestCase>() -> Result<Arc<App>> {
    let mut classes = SET_UP_CLASSES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(app) = classes.get(&TypeId::of::<T>()) {
        return Ok(Arc::clone(app));
    }

    let app = app::bootstrap(&T::store(), &T::run_type(), T::options())?;
    debug!(
        class = type_name::<T>(),
        store = app.store(),
        "Test class set up"
    );
    classes.insert(TypeId::of::<T>(), Arc::clone(&app));
    Ok(app)
}

/// Whether `T` has already been set up in this process.
pub fn is_set_up<T: TestCase>() -> bool {
    SET_UP_CLASSES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .contains_key(&TypeId::of::<T>())
}
