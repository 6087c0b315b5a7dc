//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ModgraphError, Result};
use crate::models::config::{OutputFormat, PartialSettings};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".modgraph.toml";

/// Prefix of the environment variables read by `EnvConfig`
pub const ENV_PREFIX: &str = "MODGRAPH";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 10,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ModgraphError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_INPUTS`, `<PREFIX>_OUTPUT_FORMAT`, `<PREFIX>_OUTPUT_FILE`,
/// `<PREFIX>_EXCLUDE`, `<PREFIX>_STDLIB`, `<PREFIX>_SKIP_INVALID`,
/// `<PREFIX>_PARALLEL`, `<PREFIX>_COLORS` and `<PREFIX>_EXTERNAL_LIMIT`.
/// List values are comma separated.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: &[&str] = &[
    "INPUTS",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "EXCLUDE",
    "STDLIB",
    "SKIP_INVALID",
    "PARALLEL",
    "COLORS",
    "EXTERNAL_LIMIT",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.var(key) {
            None => Ok(None),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                other => Err(ModgraphError::config_error(format!(
                    "{}_{} must be a boolean, got '{}'",
                    self.prefix, key, other
                ))),
            },
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            inputs: self
                .list("INPUTS")
                .map(|inputs| inputs.into_iter().map(PathBuf::from).collect()),
            output_file: self.var("OUTPUT_FILE").map(PathBuf::from),
            exclude_patterns: self.list("EXCLUDE"),
            extra_stdlib_modules: self.list("STDLIB"),
            skip_invalid_modules: self.flag("SKIP_INVALID")?,
            parallel: self.flag("PARALLEL")?,
            use_colors: self.flag("COLORS")?,
            ..Default::default()
        };

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            let format: OutputFormat = format
                .parse()
                .map_err(|_| ModgraphError::InvalidOutputFormat { format })?;
            settings.output_format = Some(format);
        }

        if let Some(limit) = self.var("EXTERNAL_LIMIT") {
            let limit = limit.trim().parse().map_err(|_| {
                ModgraphError::config_error(format!(
                    "{}_EXTERNAL_LIMIT must be a number, got '{}'",
                    self.prefix, limit
                ))
            })?;
            settings.show_external_limit = Some(limit);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
