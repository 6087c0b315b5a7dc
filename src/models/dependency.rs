//! Dependency records produced from import statements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a referenced module lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    /// Part of the analyzed project
    Internal,
    /// Third-party package
    External,
    /// Standard library
    Stdlib,
    /// Not yet classified
    Unknown,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Internal => "internal",
            DependencyType::External => "external",
            DependencyType::Stdlib => "stdlib",
            DependencyType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic form of the import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportType {
    /// `import X`
    Module,
    /// `from X import A`
    FromImport,
    /// Either form with a dot-prefixed name
    Relative,
}

impl ImportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportType::Module => "module",
            ImportType::FromImport => "from_import",
            ImportType::Relative => "relative",
        }
    }
}

impl fmt::Display for ImportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dependency of one module on another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Referenced module path; absolute once relative imports are resolved
    pub name: String,

    pub dependency_type: DependencyType,

    pub import_type: ImportType,

    /// Canonical name of the declaring module
    pub source_module: String,

    /// Trimmed statement text the record came from
    pub import_statement: String,

    /// Canonical internal module the name maps to, if any
    pub resolved_path: Option<String>,

    /// Names imported with `from X import ...`
    pub imported_items: Vec<String>,
}

impl DependencyRecord {
    /// Create an unclassified record
    pub fn new(
        name: impl Into<String>,
        import_type: ImportType,
        source_module: impl Into<String>,
        import_statement: impl Into<String>,
        imported_items: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dependency_type: DependencyType::Unknown,
            import_type,
            source_module: source_module.into(),
            import_statement: import_statement.into(),
            resolved_path: None,
            imported_items,
        }
    }

    /// Whether the record still needs relative resolution
    pub fn is_relative(&self) -> bool {
        self.import_type == ImportType::Relative
    }

    /// Name used as the graph edge target
    pub fn target(&self) -> &str {
        self.resolved_path.as_deref().unwrap_or(&self.name)
    }
}
