use crate::{MockError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Namespace separator accepted inside type names.
pub const NAMESPACE_SEPARATOR: char = '\\';

const RESERVED_NAMES: &[&str] = &["self", "parent", "static", "class"];

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("identifier pattern is valid")
});

/// A sanitized runtime type name.
///
/// Only identifier segments joined by `\` survive construction, so a
/// `TypeName` can be embedded into a rendered definition verbatim.
/// Equality and hashing ignore ASCII case; the original spelling is kept
/// for display.
#[derive(Debug, Clone, Eq)]
pub struct TypeName(String);

impl TypeName {
    /// Sanitize untrusted input into a type name.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let candidate = trimmed
            .strip_prefix(NAMESPACE_SEPARATOR)
            .unwrap_or(trimmed);

        if candidate.is_empty() {
            return Err(MockError::invalid_name(raw, "name is empty"));
        }
        if !IDENTIFIER.is_match(candidate) {
            return Err(MockError::invalid_name(
                raw,
                "only letters, digits, `_` and `\\` separators are allowed, and segments cannot start with a digit",
            ));
        }
        if candidate.split(NAMESPACE_SEPARATOR).any(|segment| {
            RESERVED_NAMES
                .iter()
                .any(|reserved| reserved.eq_ignore_ascii_case(segment))
        }) {
            return Err(MockError::invalid_name(raw, "name is a reserved word"));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Parse an optional parent name. Blank input means "no parent".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(raw).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key used by the type registry.
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    pub fn matches(&self, other: &str) -> bool {
        let other = other.trim();
        let other = other.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(other);
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
