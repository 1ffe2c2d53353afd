use super::factory::MockSpec;
use super::names::TypeName;
use crate::Result;
use std::fmt;

/// Name of the statically defined registration method on intercepting mocks.
pub const MOCK_FUNCTION: &str = "mockFunction";

/// A composed mock type definition, ready to be defined into a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: TypeName,
    pub parent: Option<TypeName>,
    pub intercepts_calls: bool,
}

impl ClassDefinition {
    /// Sanitize the requested names and compose the definition.
    pub fn compose(spec: &MockSpec) -> Result<Self> {
        let name = TypeName::parse(&spec.target_name)?;
        let parent = TypeName::parse_optional(&spec.parent_name)?;
        Ok(Self {
            name,
            parent,
            intercepts_calls: spec.intercept_calls,
        })
    }
}

impl fmt::Display for ClassDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, " extends {}", parent)?;
        }
        if !self.intercepts_calls {
            return write!(f, " {{}}");
        }
        writeln!(f, " {{")?;
        writeln!(f, "    stubs: StubRegistry = {{}}")?;
        writeln!(f, "    fn {}(name, value) {{ stubs[name] = value }}", MOCK_FUNCTION)?;
        writeln!(
            f,
            "    fn *(name, args) {{ stubs[name] or MethodNotFound(name) }}"
        )?;
        write!(f, "}}")
    }
}
