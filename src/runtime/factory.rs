use super::definition::ClassDefinition;
use super::mocking::MockInstance;
use super::types::TypeRegistry;
use crate::logging;
use crate::resolver::ClassResolver;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_intercept_calls() -> bool {
    true
}

/// A mock generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSpec {
    pub target_name: String,
    /// Blank means no parent.
    #[serde(default)]
    pub parent_name: String,
    #[serde(default = "default_intercept_calls")]
    pub intercept_calls: bool,
}

impl MockSpec {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            parent_name: String::new(),
            intercept_calls: true,
        }
    }

    pub fn extends(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = parent_name.into();
        self
    }

    pub fn without_interception(mut self) -> Self {
        self.intercept_calls = false;
        self
    }
}

/// Generates mock types into a [`TypeRegistry`] and instantiates them.
///
/// ```
/// use mage_mock::{ConfigResolver, MockFactory, TypeRegistry};
/// use std::sync::Arc;
///
/// let factory = MockFactory::new(
///     Arc::new(TypeRegistry::with_host_types()),
///     Arc::new(ConfigResolver::default()),
/// );
/// let mut customer = factory.create_object("MockCustomer", "", true).unwrap();
/// customer.mock_function("getName", "Alicia").unwrap();
/// assert_eq!(customer.call("getName", &[]).unwrap(), "Alicia");
/// ```
#[derive(Clone)]
pub struct MockFactory {
    types: Arc<TypeRegistry>,
    resolver: Arc<dyn ClassResolver>,
}

impl MockFactory {
    pub fn new(types: Arc<TypeRegistry>, resolver: Arc<dyn ClassResolver>) -> Self {
        Self { types, resolver }
    }

    /// Factory over the process-wide type registry.
    pub fn with_global_registry(resolver: Arc<dyn ClassResolver>) -> Self {
        Self::new(TypeRegistry::global(), resolver)
    }

    pub fn types(&self) -> &Arc<TypeRegistry> {
        &self.types
    }

    pub fn resolver(&self) -> &Arc<dyn ClassResolver> {
        &self.resolver
    }

    /// Define a fresh type for `spec` and return an instance of it.
    ///
    /// The type stays defined for the lifetime of the registry; defining the
    /// same name again fails with `DuplicateDefinition`.
    pub fn create(&self, spec: &MockSpec) -> Result<MockInstance> {
        let definition = ClassDefinition::compose(spec)?;
        logging::log_definition_composed(&definition);
        let descriptor = self.types.define(&definition)?;
        Ok(MockInstance::instantiate(descriptor))
    }

    pub fn create_object(
        &self,
        target_name: &str,
        parent_name: &str,
        intercept_calls: bool,
    ) -> Result<MockInstance> {
        self.create(&MockSpec {
            target_name: target_name.to_string(),
            parent_name: parent_name.to_string(),
            intercept_calls,
        })
    }

    /// Mock the model behind a short name such as `catalog/product`.
    pub fn create_from_short_name(
        &self,
        short_name: &str,
        parent_name: &str,
        intercept_calls: bool,
    ) -> Result<MockInstance> {
        let class_name = self.resolver.model_class_name(short_name)?;
        self.create_object(&class_name, parent_name, intercept_calls)
    }

    /// Singletons resolve exactly like models.
    pub fn create_singleton_from_short_name(
        &self,
        short_name: &str,
        parent_name: &str,
        intercept_calls: bool,
    ) -> Result<MockInstance> {
        self.create_from_short_name(short_name, parent_name, intercept_calls)
    }

    /// Mock the helper behind a short name such as `catalog` or `catalog/image`.
    pub fn create_helper_from_short_name(
        &self,
        short_name: &str,
        parent_name: &str,
        intercept_calls: bool,
    ) -> Result<MockInstance> {
        let class_name = self.resolver.helper_class_name(short_name)?;
        self.create_object(&class_name, parent_name, intercept_calls)
    }
}

impl std::fmt::Debug for MockFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFactory")
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ClassKind, ConfigResolver};
    use crate::MockError;
    use std::collections::HashMap;

    fn factory() -> MockFactory {
        let resolver = ConfigResolver::new(
            HashMap::from([("catalog".to_string(), "Mage_Catalog_Model".to_string())]),
            HashMap::from([("catalog".to_string(), "Mage_Catalog_Helper".to_string())]),
        );
        MockFactory::new(Arc::new(TypeRegistry::with_host_types()), Arc::new(resolver))
    }

    #[test]
    fn spec_defaults_to_interception_without_parent() {
        let spec: MockSpec = serde_json::from_str(r#"{"target_name": "MockCustomer"}"#).unwrap();
        assert_eq!(spec, MockSpec::new("MockCustomer"));
    }

    #[test]
    fn creates_instance_that_is_a_parent() {
        let factory = factory();
        let mock = factory
            .create_object("Mage_Sales_Model_Order", "Mage_Core_Model_Abstract", true)
            .unwrap();

        assert!(mock.is_a("Mage_Sales_Model_Order"));
        assert!(mock.is_a("Mage_Core_Model_Abstract"));
        assert!(mock.is_a("Varien_Object"));
        assert!(factory.types().is_defined("Mage_Sales_Model_Order"));
    }

    #[test]
    fn second_definition_of_a_name_fails() {
        let factory = factory();
        factory.create(&MockSpec::new("MockCustomer")).unwrap();
        let err = factory.create(&MockSpec::new("MockCustomer")).unwrap_err();
        assert_eq!(err, MockError::DuplicateDefinition("MockCustomer".into()));
    }

    #[test]
    fn invalid_name_leaves_registry_untouched() {
        let factory = factory();
        let before = factory.types().len();
        let err = factory.create_object("Foo {", "", true).unwrap_err();
        assert!(matches!(err, MockError::InvalidName { .. }));
        assert_eq!(factory.types().len(), before);
    }

    #[test]
    fn short_names_resolve_before_creation() {
        let factory = factory();
        let product = factory
            .create_from_short_name("catalog/product", "", true)
            .unwrap();
        assert_eq!(product.type_name(), "Mage_Catalog_Model_Product");

        let helper = factory
            .create_helper_from_short_name("catalog", "", true)
            .unwrap();
        assert_eq!(helper.type_name(), "Mage_Catalog_Helper_Data");

        let singleton = factory
            .create_singleton_from_short_name("catalog/session", "", true)
            .unwrap();
        assert_eq!(singleton.type_name(), "Mage_Catalog_Model_Session");
    }

    #[test]
    fn unresolved_short_name_is_reported() {
        let factory = factory();
        let err = factory
            .create_from_short_name("sales/order", "", true)
            .unwrap_err();
        assert_eq!(
            err,
            MockError::UnresolvedShortName {
                kind: ClassKind::Model,
                short_name: "sales/order".into(),
            }
        );
    }
}
