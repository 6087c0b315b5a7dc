//! Relative import resolution
//!
//! `from ..x import y` inside `pkg.sub.mod` refers to `pkg.x`: one dot is the
//! declaring module's own package, and every further dot climbs one package
//! level. Climbing past the root leaves an empty base rather than failing.

use crate::error::{ModgraphError, Result};
use tracing::warn;

/// Resolver for dot-prefixed import names
#[derive(Debug, Default, Clone, Copy)]
pub struct RelativeImportResolver;

impl RelativeImportResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `name` as imported from `source_module`
    ///
    /// On failure the unmodified name is returned and a warning is logged.
    pub fn resolve(&self, name: &str, source_module: &str) -> String {
        match self.try_resolve(name, source_module) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(
                    import = name,
                    source_module,
                    "{}; keeping the name unresolved",
                    err
                );
                name.to_string()
            }
        }
    }

    /// Resolve `name`, reporting why resolution was impossible
    pub fn try_resolve(&self, name: &str, source_module: &str) -> Result<String> {
        let remainder = name.trim_start_matches('.');
        let dots = name.len() - remainder.len();
        if dots == 0 {
            return Ok(name.to_string());
        }

        if source_module.is_empty() || source_module.split('.').any(str::is_empty) {
            return Err(ModgraphError::relative_import(
                name,
                source_module,
                "declaring module name has an empty segment",
            ));
        }
        if !remainder.is_empty() && remainder.split('.').any(str::is_empty) {
            return Err(ModgraphError::relative_import(
                name,
                source_module,
                "import path has an empty segment",
            ));
        }

        let mut package: Vec<&str> = source_module.split('.').collect();
        package.pop();

        let levels_up = dots - 1;
        package.truncate(package.len().saturating_sub(levels_up));

        if !remainder.is_empty() {
            package.push(remainder);
        }
        Ok(package.join("."))
    }
}

/// Resolve a relative import with the default resolver
pub fn resolve_relative_import(name: &str, source_module: &str) -> String {
    RelativeImportResolver.resolve(name, source_module)
}
