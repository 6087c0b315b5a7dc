//! Validation of merged settings

use std::path::Path;

use crate::error::{ModgraphError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        for input in &settings.inputs {
            if !input.is_file() {
                return Err(ModgraphError::InputNotFound { path: input.clone() });
            }
        }

        for pattern in &settings.analyzer.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                ModgraphError::config_error(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        if let Some(name) = settings
            .analyzer
            .extra_stdlib_modules
            .iter()
            .find(|name| name.is_empty() || name.contains('.'))
        {
            return Err(ModgraphError::config_error(format!(
                "Invalid stdlib module '{}': use top-level names only",
                name
            )));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the directory of an output path exists
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ModgraphError::config_error(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}
