//! Module records supplied to the analyzer

use crate::error::{ModgraphError, Result};
use serde::{Deserialize, Serialize};

/// A source module and the raw import statements it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Canonical dotted name, e.g. `pkg.sub.mod`
    pub name: String,

    /// Path of the source file relative to the project root
    #[serde(default)]
    pub path: String,

    /// Raw import statements in source order
    #[serde(default)]
    pub imports: Vec<String>,
}

impl Module {
    /// Create a new module record
    pub fn new(name: impl Into<String>, path: impl Into<String>, imports: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            imports,
        }
    }

    /// Create a module record from string slices, deriving no path
    pub fn with_imports(name: impl Into<String>, imports: &[&str]) -> Self {
        Self::new(
            name,
            String::new(),
            imports.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Dotted segments of the canonical name
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }

    /// Last segment of the canonical name
    pub fn leaf(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Check the input contract: a non-empty name with no empty segments
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModgraphError::invalid_module(&self.name, "module name is empty"));
        }

        if self.segments().any(|segment| segment.is_empty()) {
            return Err(ModgraphError::invalid_module(
                &self.name,
                "module name contains an empty dotted segment",
            ));
        }

        Ok(())
    }
}
