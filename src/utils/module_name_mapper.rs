//! Lookup from every plausible spelling of an internal module to its
//! canonical name.
//!
//! `src.pkg.mod` may be imported as `src.pkg.mod`, `pkg.mod` or `mod`. Each
//! canonical name always maps to itself, even when an earlier module already
//! claimed it as a suffix, matching the Python analyzer this mirrors.
//! Shorter spellings go to the first module that claims them.

use crate::models::module::Module;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ModuleNameMapper {
    mapping: HashMap<String, String>,
}

impl ModuleNameMapper {
    /// Build the lookup for `modules`, in order
    pub fn from_modules(modules: &[Module]) -> Self {
        let mut mapping = HashMap::new();

        for module in modules {
            mapping.insert(module.name.clone(), module.name.clone());

            let segments: Vec<&str> = module.segments().collect();
            for start in 1..segments.len() {
                mapping
                    .entry(segments[start..].join("."))
                    .or_insert_with(|| module.name.clone());
            }

            mapping
                .entry(module.leaf().to_string())
                .or_insert_with(|| module.name.clone());
        }

        Self { mapping }
    }

    /// Canonical name for a referenced module path
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.mapping.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
