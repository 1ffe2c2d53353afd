use super::definition::MOCK_FUNCTION;
use super::dispatch::DataMap;
use super::types::TypeDescriptor;
use crate::logging;
use crate::{MockError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed responses keyed by method name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StubRegistry {
    stubs: HashMap<String, Value>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the response for `method`, returning the previous one.
    pub fn register(&mut self, method: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.stubs.insert(method.into(), value.into())
    }

    pub fn resolve(&self, method: &str) -> Option<&Value> {
        self.stubs.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.stubs.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stubs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MockCallLogEntry {
    pub method: String,
    pub args_count: usize,
    /// Whether the call was answered (by a stub or a parent handler).
    pub answered: bool,
}

/// An instance of a generated mock type.
#[derive(Debug)]
pub struct MockInstance {
    descriptor: Arc<TypeDescriptor>,
    stubs: Option<StubRegistry>,
    data: DataMap,
    calls: Vec<MockCallLogEntry>,
}

impl MockInstance {
    /// Instantiate `descriptor` with no constructor arguments.
    pub(crate) fn instantiate(descriptor: Arc<TypeDescriptor>) -> Self {
        let stubs = descriptor.intercepts_calls().then(StubRegistry::new);
        Self {
            descriptor,
            stubs,
            data: DataMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Instance-of check against the type and all its ancestors.
    pub fn is_a(&self, name: &str) -> bool {
        self.descriptor.is_a(name)
    }

    pub fn intercepts_calls(&self) -> bool {
        self.stubs.is_some()
    }

    /// Set the fixed response for `method`. Only available when the type
    /// intercepts calls.
    pub fn mock_function(&mut self, method: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let type_name = self.descriptor.name();
        let Some(stubs) = self.stubs.as_mut() else {
            return Err(MockError::UndefinedMethod {
                type_name: type_name.to_string(),
                method: MOCK_FUNCTION.to_string(),
            });
        };
        let method = method.into();
        let replaced = stubs.register(method.clone(), value).is_some();
        logging::log_stub_registered(type_name, &method, replaced);
        Ok(())
    }

    /// Invoke `method` through dynamic dispatch.
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        let result = self.dispatch(method, args);
        self.calls.push(MockCallLogEntry {
            method: method.to_string(),
            args_count: args.len(),
            answered: result.is_ok(),
        });
        result
    }

    fn dispatch(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        if self.stubs.is_some() {
            if method == MOCK_FUNCTION {
                return self.mock_function_from_args(args);
            }
            if let Some(value) = self.stubs.as_ref().and_then(|s| s.resolve(method)) {
                return Ok(value.clone());
            }
            logging::log_unmocked_call(self.type_name(), method);
            return Err(MockError::MethodNotFound {
                type_name: self.type_name().to_string(),
                method: method.to_string(),
            });
        }

        if let Some(handler) = self.descriptor.dispatch_handler() {
            if let Some(value) = handler.dispatch(&mut self.data, method, args) {
                return Ok(value);
            }
        }
        Err(MockError::UndefinedMethod {
            type_name: self.type_name().to_string(),
            method: method.to_string(),
        })
    }

    fn mock_function_from_args(&mut self, args: &[Value]) -> Result<Value> {
        let invalid = |reason: &str| MockError::InvalidArgument {
            type_name: self.type_name().to_string(),
            method: MOCK_FUNCTION.to_string(),
            reason: reason.to_string(),
        };
        let name = match args.first() {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            Some(Value::String(_)) => return Err(invalid("method name is empty")),
            Some(other) => return Err(invalid(&format!("method name must be a string, got {other}"))),
            None => return Err(invalid("missing method name")),
        };
        let value = args
            .get(1)
            .cloned()
            .ok_or_else(|| invalid("missing return value"))?;
        self.mock_function(name, value)?;
        Ok(Value::Null)
    }

    /// Names of the stubbed methods, sorted. Empty without interception.
    pub fn stubbed_methods(&self) -> Vec<&str> {
        self.stubs
            .as_ref()
            .map(StubRegistry::methods)
            .unwrap_or_default()
    }

    pub fn stubs(&self) -> Option<&StubRegistry> {
        self.stubs.as_ref()
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }

    pub fn calls(&self) -> &[MockCallLogEntry] {
        &self.calls
    }
}
