//! Short-name resolution: `catalog/product` -> `Mage_Catalog_Model_Product`.

use crate::config::FrameworkConfig;
use crate::logging;
use crate::{MockError, Result};
use std::collections::HashMap;
use std::fmt;

/// Which factory group a short name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Model,
    Helper,
}

impl ClassKind {
    /// Segment used when composing fallback class prefixes.
    fn segment(self) -> &'static str {
        match self {
            ClassKind::Model => "model",
            ClassKind::Helper => "helper",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Maps framework short names to fully qualified class names.
pub trait ClassResolver: Send + Sync {
    fn model_class_name(&self, short_name: &str) -> Result<String>;
    fn helper_class_name(&self, short_name: &str) -> Result<String>;
}

/// Resolver driven by the `[framework]` configuration section.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    models: HashMap<String, String>,
    helpers: HashMap<String, String>,
    model_rewrites: HashMap<String, String>,
    helper_rewrites: HashMap<String, String>,
    fallback_vendor: Option<String>,
}

impl ConfigResolver {
    /// Resolver with group prefixes only.
    pub fn new(models: HashMap<String, String>, helpers: HashMap<String, String>) -> Self {
        Self {
            models,
            helpers,
            ..Self::default()
        }
    }

    pub fn from_config(config: &FrameworkConfig) -> Self {
        Self {
            models: config.models.clone(),
            helpers: config.helpers.clone(),
            model_rewrites: config.rewrites.models.clone(),
            helper_rewrites: config.rewrites.helpers.clone(),
            fallback_vendor: config.fallback_vendor.as_deref().and_then(vendor_name),
        }
    }

    /// Use `vendor` for unconfigured groups. A blank vendor disables the fallback.
    pub fn with_fallback_vendor(mut self, vendor: impl AsRef<str>) -> Self {
        self.fallback_vendor = vendor_name(vendor.as_ref());
        self
    }

    pub fn with_rewrite(
        mut self,
        kind: ClassKind,
        short_name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        let rewrites = match kind {
            ClassKind::Model => &mut self.model_rewrites,
            ClassKind::Helper => &mut self.helper_rewrites,
        };
        rewrites.insert(short_name.into(), class_name.into());
        self
    }

    fn grouped_class_name(&self, kind: ClassKind, short_name: &str) -> Result<String> {
        let unresolved = || MockError::UnresolvedShortName {
            kind,
            short_name: short_name.to_string(),
        };

        let (group, class) = short_name.split_once('/').ok_or_else(unresolved)?;
        let (group, class) = (group.trim(), class.trim());
        if group.is_empty() || class.is_empty() {
            return Err(unresolved());
        }

        let (prefixes, rewrites) = match kind {
            ClassKind::Model => (&self.models, &self.model_rewrites),
            ClassKind::Helper => (&self.helpers, &self.helper_rewrites),
        };

        let full_name = format!("{group}/{class}");
        if let Some(rewrite) = rewrites.get(&full_name) {
            return Ok(rewrite.clone());
        }

        let prefix = match prefixes.get(group) {
            Some(prefix) => prefix.clone(),
            None => match &self.fallback_vendor {
                Some(vendor) => format!("{}_{}_{}", vendor, group, kind.segment()),
                None => return Err(unresolved()),
            },
        };

        Ok(uc_words(&format!("{prefix}_{class}")))
    }
}

fn vendor_name(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|vendor| !vendor.is_empty())
}

impl ClassResolver for ConfigResolver {
    fn model_class_name(&self, short_name: &str) -> Result<String> {
        let short_name = short_name.trim();
        let class_name = if short_name.contains('/') {
            self.grouped_class_name(ClassKind::Model, short_name)?
        } else if short_name.is_empty() {
            return Err(MockError::UnresolvedShortName {
                kind: ClassKind::Model,
                short_name: short_name.to_string(),
            });
        } else {
            short_name.to_string()
        };
        logging::log_short_name_resolved("model", short_name, &class_name);
        Ok(class_name)
    }

    fn helper_class_name(&self, short_name: &str) -> Result<String> {
        let short_name = short_name.trim();
        let qualified = if short_name.contains('/') {
            short_name.to_string()
        } else {
            format!("{short_name}/data")
        };
        let class_name = self
            .grouped_class_name(ClassKind::Helper, &qualified)
            .map_err(|_| MockError::UnresolvedShortName {
                kind: ClassKind::Helper,
                short_name: short_name.to_string(),
            })?;
        logging::log_short_name_resolved("helper", short_name, &class_name);
        Ok(class_name)
    }
}

/// Uppercase the first letter of every `_`-separated word.
pub fn uc_words(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("_")
}
