use mage_mock::{ConfigResolver, MockError, MockFactory, TypeRegistry};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::utils::{json_value, method_name};

fn factory() -> MockFactory {
    MockFactory::new(
        Arc::new(TypeRegistry::new()),
        Arc::new(ConfigResolver::default()),
    )
}

proptest! {
    #[test]
    fn registered_method_returns_exact_value(name in method_name(), value in json_value()) {
        let mut mock = factory().create_object("PropMock", "", true).unwrap();
        mock.mock_function(name.clone(), value.clone()).unwrap();
        prop_assert_eq!(mock.call(&name, &[]).unwrap(), value);
    }

    #[test]
    fn unregistered_method_names_the_method(
        registered in prop::collection::hash_set(method_name(), 0..8),
        missing in method_name(),
    ) {
        prop_assume!(!registered.contains(&missing));
        let mut mock = factory().create_object("PropMock", "", true).unwrap();
        for name in &registered {
            mock.mock_function(name.clone(), true).unwrap();
        }

        let err = mock.call(&missing, &[]).unwrap_err();
        prop_assert_eq!(
            err,
            MockError::MethodNotFound { type_name: "PropMock".into(), method: missing }
        );
    }

    #[test]
    fn registration_order_does_not_matter(
        entries in prop::collection::vec((method_name(), json_value()), 1..12),
    ) {
        let mut forward = factory().create_object("Forward", "", true).unwrap();
        let mut backward = factory().create_object("Backward", "", true).unwrap();

        let mut last: HashMap<String, serde_json::Value> = HashMap::new();
        for (name, value) in &entries {
            forward.mock_function(name.clone(), value.clone()).unwrap();
            last.insert(name.clone(), value.clone());
        }
        for (name, value) in &last {
            backward.mock_function(name.clone(), value.clone()).unwrap();
        }

        for (name, value) in &last {
            prop_assert_eq!(&forward.call(name, &[]).unwrap(), value);
            prop_assert_eq!(&backward.call(name, &[]).unwrap(), value);
        }
        prop_assert_eq!(forward.stubbed_methods(), backward.stubbed_methods());
    }

    #[test]
    fn arguments_never_change_the_response(
        name in method_name(),
        value in json_value(),
        args in prop::collection::vec(json_value(), 0..4),
    ) {
        let mut mock = factory().create_object("ArgMock", "", true).unwrap();
        mock.mock_function(name.clone(), value.clone()).unwrap();
        prop_assert_eq!(mock.call(&name, &args).unwrap(), value);
    }
}
