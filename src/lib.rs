pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod resolver;
pub mod runtime;
pub mod ui;
use miette::Diagnostic;

pub use app::App;
pub use resolver::{ClassKind, ClassResolver, ConfigResolver};
pub use runtime::factory::{MockFactory, MockSpec};
pub use runtime::mocking::{MockInstance, StubRegistry};
pub use runtime::types::TypeRegistry;

/// Canned response values returned by mocked methods.
pub use serde_json::Value;

/// Result type alias for mock generation and dispatch
pub type Result<T, E = MockError> = std::result::Result<T, E>;

/// Error types for mock generation, dispatch and bootstrap
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Invalid type name '{name}': {reason}")]
    #[diagnostic(
        code(mage_mock::invalid_name),
        help("Type names must be identifiers such as `Mage_Customer_Model_Customer`, optionally namespaced with `\\`.")
    )]
    InvalidName { name: String, reason: String },

    #[error("Type '{0}' is already defined in this process")]
    #[diagnostic(
        code(mage_mock::duplicate_definition),
        help("Generated types live for the whole process. Use a unique target name per mock, including across test cases.")
    )]
    DuplicateDefinition(String),

    #[error("Cannot define '{target}': parent type '{parent}' is not defined")]
    #[diagnostic(
        code(mage_mock::unresolved_parent),
        help("Declare the parent as a host type (see `[[types]]` in .mage-mock.toml) or create its mock first.")
    )]
    UnresolvedParent { target: String, parent: String },

    #[error("Cannot resolve {kind} short name '{short_name}'")]
    #[diagnostic(
        code(mage_mock::unresolved_short_name),
        help("Add the group to `[framework.models]` / `[framework.helpers]`, add a rewrite, or set `fallback_vendor`.")
    )]
    UnresolvedShortName { kind: ClassKind, short_name: String },

    #[error("The method {method} does not exist on mock '{type_name}'")]
    #[diagnostic(
        code(mage_mock::method_not_found),
        help("Register a response first with `mock_function(name, value)`.")
    )]
    MethodNotFound { type_name: String, method: String },

    #[error("Call to undefined method {type_name}::{method}()")]
    #[diagnostic(
        code(mage_mock::undefined_method),
        help("This type does not intercept calls. Create the mock with call interception enabled to stub methods.")
    )]
    UndefinedMethod { type_name: String, method: String },

    #[error("Invalid arguments to {type_name}::{method}(): {reason}")]
    #[diagnostic(
        code(mage_mock::invalid_argument),
        help("Pass the method name as a non-empty string followed by the value to return.")
    )]
    InvalidArgument {
        type_name: String,
        method: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(mage_mock::config_error),
        help("Check that .mage-mock.toml is valid TOML and readable.")
    )]
    Config(String),

    #[error("Application bootstrap failed: {0}")]
    #[diagnostic(
        code(mage_mock::bootstrap_failed),
        help("Valid run types are `store`, `group` and `website`; the store code must not be empty.")
    )]
    Bootstrap(String),
}

impl MockError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        MockError::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
