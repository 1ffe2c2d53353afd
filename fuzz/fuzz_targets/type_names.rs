#![no_main]

use libfuzzer_sys::fuzz_target;
use mage_mock::runtime::{ClassDefinition, MockSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let spec = MockSpec::new(raw).extends(raw);
        if let Ok(definition) = ClassDefinition::compose(&spec) {
            let rendered = definition.to_string();
            assert!(!definition.name.as_str().contains(['{', '}', ';', '<', '>', ' ']));
            assert!(rendered.starts_with("type "));
        }
    }
});
