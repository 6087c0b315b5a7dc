//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Knobs of the analysis core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Top-level names treated as standard library in addition to the built-in set
    pub extra_stdlib_modules: Vec<String>,

    /// Glob patterns on canonical module names; matching modules are not analysed
    pub exclude_patterns: Vec<String>,

    /// Skip modules breaking the input contract instead of failing the run
    pub skip_invalid_modules: bool,
}

/// Main configuration settings for modgraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Module list files to analyse
    pub inputs: Vec<PathBuf>,

    /// Output format (text, json, csv, dot)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed output and debug logging
    pub verbose: bool,

    /// Whether to analyse several inputs in parallel
    pub parallel: bool,

    /// How many external packages the text report lists
    pub show_external_limit: usize,

    /// Settings passed to the analyzer
    pub analyzer: AnalyzerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            quiet: false,
            verbose: false,
            parallel: true,
            show_external_limit: 10,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per dependency record
    Csv,
    /// Graphviz DOT source of the dependency graph
    Dot,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "dot" => Ok(OutputFormat::Dot),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub inputs: Option<Vec<PathBuf>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub parallel: Option<bool>,
    pub show_external_limit: Option<usize>,
    pub extra_stdlib_modules: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub skip_invalid_modules: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.inputs.is_some() {
            self.inputs = other.inputs;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.show_external_limit.is_some() {
            self.show_external_limit = other.show_external_limit;
        }
        if other.extra_stdlib_modules.is_some() {
            self.extra_stdlib_modules = other.extra_stdlib_modules;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.skip_invalid_modules.is_some() {
            self.skip_invalid_modules = other.skip_invalid_modules;
        }
    }

    /// Convert to full settings, using defaults for missing values
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            inputs: self.inputs.clone().unwrap_or(defaults.inputs),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            show_external_limit: self
                .show_external_limit
                .unwrap_or(defaults.show_external_limit),
            analyzer: AnalyzerConfig {
                extra_stdlib_modules: self
                    .extra_stdlib_modules
                    .clone()
                    .unwrap_or(defaults.analyzer.extra_stdlib_modules),
                exclude_patterns: self
                    .exclude_patterns
                    .clone()
                    .unwrap_or(defaults.analyzer.exclude_patterns),
                skip_invalid_modules: self
                    .skip_invalid_modules
                    .unwrap_or(defaults.analyzer.skip_invalid_modules),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("dot".parse::<OutputFormat>(), Ok(OutputFormat::Dot));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = PartialSettings {
            quiet: Some(true),
            parallel: Some(false),
            ..Default::default()
        };
        base.merge_from(PartialSettings {
            quiet: Some(false),
            ..Default::default()
        });

        assert_eq!(base.quiet, Some(false));
        assert_eq!(base.parallel, Some(false));
    }

    #[test]
    fn test_to_settings_fills_defaults() {
        let settings = PartialSettings {
            exclude_patterns: Some(vec!["tests.*".to_string()]),
            ..Default::default()
        }
        .to_settings();

        assert_eq!(settings.output_format, OutputFormat::Text);
        assert!(settings.parallel);
        assert_eq!(settings.show_external_limit, 10);
        assert_eq!(settings.analyzer.exclude_patterns, vec!["tests.*"]);
        assert!(!settings.analyzer.skip_invalid_modules);
    }
}
