use mage_mock::runtime::TypeName;
use mage_mock::{ConfigResolver, MockError, MockFactory, TypeRegistry};
use proptest::prelude::*;
use std::sync::Arc;

use crate::utils::type_name;

proptest! {
    #[test]
    fn valid_names_define_once(name in type_name()) {
        let factory = MockFactory::new(
            Arc::new(TypeRegistry::new()),
            Arc::new(ConfigResolver::default()),
        );
        let mock = factory.create_object(&name, "", true).unwrap();
        prop_assert!(mock.is_a(&name));
        prop_assert!(mock.is_a(&name.to_lowercase()));

        let duplicate = factory.create_object(&name.to_uppercase(), "", true);
        prop_assert!(matches!(duplicate, Err(MockError::DuplicateDefinition(_))));
    }

    #[test]
    fn names_with_markup_or_code_are_rejected(
        prefix in type_name(),
        bad in "[{}();<>\"'$&|-]",
        suffix in "[A-Za-z0-9]{0,5}",
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        let result = TypeName::parse(&raw);
        prop_assert!(matches!(result, Err(MockError::InvalidName { .. })), "{:?} accepted", raw);
    }
}
