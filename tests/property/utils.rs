use proptest::prelude::*;
use serde_json::{Number, Value};

pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Number(Number::from(i))),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(
        4,  // levels deep
        64, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                prop::collection::hash_map(any::<String>(), inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Method names that never collide with the built-in `mockFunction`.
pub fn method_name() -> impl Strategy<Value = String> {
    "[a-z][A-Za-z0-9_]{0,24}".prop_filter("built-in name", |n| n != "mockFunction")
}

pub fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,10}(_[A-Z][A-Za-z0-9]{0,10}){0,3}".prop_filter("reserved word", |n| {
        !["self", "parent", "static", "class"]
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(n))
    })
}
