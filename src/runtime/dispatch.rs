use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

/// Per-instance data that host catch-all handlers read and write.
pub type DataMap = Map<String, Value>;

/// A host type's own catch-all handler.
///
/// Returns `None` when the handler does not recognize the method, in which
/// case the call fails with the default "undefined method" error.
pub trait DispatchHandler: Send + Sync + fmt::Debug {
    fn dispatch(&self, data: &mut DataMap, method: &str, args: &[Value]) -> Option<Value>;
}

/// The data-object magic accessors: `getX`, `setX`, `unsX` and `hasX`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataObjectAccessors;

impl DispatchHandler for DataObjectAccessors {
    fn dispatch(&self, data: &mut DataMap, method: &str, args: &[Value]) -> Option<Value> {
        if method.len() <= 3 || !method.is_char_boundary(3) {
            return None;
        }
        let (prefix, rest) = method.split_at(3);
        let key = underscore(rest);
        match prefix {
            "get" => Some(data.get(&key).cloned().unwrap_or(Value::Null)),
            "set" => {
                data.insert(key, args.first().cloned().unwrap_or(Value::Null));
                Some(Value::Null)
            }
            "uns" => {
                data.remove(&key);
                Some(Value::Null)
            }
            "has" => Some(Value::Bool(data.contains_key(&key))),
            _ => None,
        }
    }
}

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z])").expect("camel boundary pattern is valid"));

/// Convert an accessor suffix to its data key: `CustomerName` -> `customer_name`.
pub fn underscore(name: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
}
