use super::definition::ClassDefinition;
use super::dispatch::{DataObjectAccessors, DispatchHandler};
use super::names::TypeName;
use crate::logging;
use crate::{MockError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Root data object of the framework; answers magic accessors.
pub const VARIEN_OBJECT: &str = "Varien_Object";
pub const CORE_MODEL_ABSTRACT: &str = "Mage_Core_Model_Abstract";
pub const CORE_HELPER_ABSTRACT: &str = "Mage_Core_Helper_Abstract";
pub const CORE_BLOCK_ABSTRACT: &str = "Mage_Core_Block_Abstract";

static GLOBAL_TYPES: Lazy<Arc<TypeRegistry>> =
    Lazy::new(|| Arc::new(TypeRegistry::with_host_types()));

/// Where a type definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOrigin {
    /// Declared by the host application (seeded or from config).
    Host,
    /// Generated by the mock factory.
    Mock,
}

/// A type defined at run time.
pub struct TypeDescriptor {
    name: TypeName,
    parent: Option<Arc<TypeDescriptor>>,
    intercepts_calls: bool,
    origin: TypeOrigin,
    handler: Option<Arc<dyn DispatchHandler>>,
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_name(&self) -> &TypeName {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<TypeDescriptor>> {
        self.parent.as_ref()
    }

    pub fn intercepts_calls(&self) -> bool {
        self.intercepts_calls
    }

    pub fn origin(&self) -> TypeOrigin {
        self.origin
    }

    /// This type followed by its ancestors, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(Some(self), |ty| ty.parent.as_deref())
    }

    /// Whether this type is `name` or inherits from it.
    pub fn is_a(&self, name: &str) -> bool {
        self.lineage().any(|ty| ty.name.matches(name))
    }

    /// The nearest catch-all handler on this type or an ancestor.
    pub fn dispatch_handler(&self) -> Option<&Arc<dyn DispatchHandler>> {
        self.lineage().find_map(|ty| ty.handler.as_ref())
    }

    /// Ancestry rendered as `Child -> Parent -> Root`.
    pub fn ancestry(&self) -> String {
        self.lineage()
            .map(TypeDescriptor::name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name.as_str())
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("intercepts_calls", &self.intercepts_calls)
            .field("origin", &self.origin)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Process-scoped, append-only set of defined types.
///
/// Definition is check-and-insert under a single write lock, so at most one
/// of several racing definitions of a name succeeds.
#[derive(Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, Arc<TypeDescriptor>>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the framework's base types.
    pub fn with_host_types() -> Self {
        let registry = Self::new();
        registry.seed_host_types();
        registry
    }

    /// The registry shared by the whole process.
    pub fn global() -> Arc<TypeRegistry> {
        Arc::clone(&*GLOBAL_TYPES)
    }

    fn seed_host_types(&self) {
        let seeds: [(&str, Option<&str>, Option<Arc<dyn DispatchHandler>>); 4] = [
            (
                VARIEN_OBJECT,
                None,
                Some(Arc::new(DataObjectAccessors) as Arc<dyn DispatchHandler>),
            ),
            (CORE_MODEL_ABSTRACT, Some(VARIEN_OBJECT), None),
            (CORE_HELPER_ABSTRACT, None, None),
            (CORE_BLOCK_ABSTRACT, Some(VARIEN_OBJECT), None),
        ];
        for (name, parent, handler) in seeds {
            if let Err(e) = self.declare_host_type(name, parent, handler) {
                logging::log_definition_rejected(name, &e.to_string());
            }
        }
    }

    /// Declare a host type that mocks can extend.
    pub fn declare_host_type(
        &self,
        name: &str,
        parent: Option<&str>,
        handler: Option<Arc<dyn DispatchHandler>>,
    ) -> Result<Arc<TypeDescriptor>> {
        let name = TypeName::parse(name)?;
        let parent = match parent {
            Some(raw) => TypeName::parse_optional(raw)?,
            None => None,
        };
        let descriptor = self.insert(name, parent, false, TypeOrigin::Host, handler)?;
        logging::log_host_type_declared(descriptor.name(), descriptor.parent().map(|p| p.name()));
        Ok(descriptor)
    }

    /// Define a generated mock type.
    pub fn define(&self, definition: &ClassDefinition) -> Result<Arc<TypeDescriptor>> {
        let descriptor = self.insert(
            definition.name.clone(),
            definition.parent.clone(),
            definition.intercepts_calls,
            TypeOrigin::Mock,
            None,
        )?;
        logging::log_type_defined(
            descriptor.name(),
            descriptor.parent().map(|p| p.name()),
            descriptor.intercepts_calls(),
        );
        Ok(descriptor)
    }

    fn insert(
        &self,
        name: TypeName,
        parent: Option<TypeName>,
        intercepts_calls: bool,
        origin: TypeOrigin,
        handler: Option<Arc<dyn DispatchHandler>>,
    ) -> Result<Arc<TypeDescriptor>> {
        let mut types = self
            .types
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let key = name.key();
        if types.contains_key(&key) {
            logging::log_definition_rejected(name.as_str(), "duplicate definition");
            return Err(MockError::DuplicateDefinition(name.to_string()));
        }

        let parent = match parent {
            Some(parent_name) => match types.get(&parent_name.key()) {
                Some(descriptor) => Some(Arc::clone(descriptor)),
                None => {
                    logging::log_definition_rejected(name.as_str(), "unresolved parent");
                    return Err(MockError::UnresolvedParent {
                        target: name.to_string(),
                        parent: parent_name.to_string(),
                    });
                }
            },
            None => None,
        };

        let descriptor = Arc::new(TypeDescriptor {
            name,
            parent,
            intercepts_calls,
            origin,
            handler,
        });
        types.insert(key, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        let name = TypeName::parse(name).ok()?;
        self.types
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&name.key())
            .cloned()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All defined types, sorted by name.
    pub fn descriptors(&self) -> Vec<Arc<TypeDescriptor>> {
        let mut all: Vec<_> = self
            .types
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .cloned()
            .collect();
        all.sort_by_key(|ty| ty.type_name().key());
        all
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.len())
            .finish()
    }
}
