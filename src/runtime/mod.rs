pub mod definition;
pub mod dispatch;
pub mod factory;
pub mod mocking;
pub mod names;
pub mod types;

pub use definition::{ClassDefinition, MOCK_FUNCTION};
pub use dispatch::{DataMap, DataObjectAccessors, DispatchHandler};
pub use factory::{MockFactory, MockSpec};
pub use mocking::{MockCallLogEntry, MockInstance, StubRegistry};
pub use names::TypeName;
pub use types::{TypeDescriptor, TypeOrigin, TypeRegistry};
