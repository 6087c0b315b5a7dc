//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub inputs: Vec<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub stdlib: Vec<String>,
    pub skip_invalid: bool,
    pub external_limit: Option<usize>,
    pub no_parallel: bool,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Dot => OutputFormat::Dot,
        }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            inputs: args.inputs.clone(),
            output_format: args.output.map(OutputFormat::from),
            output_file: args.output_file.clone(),
            exclude: args.exclude.clone(),
            stdlib: args.stdlib.clone(),
            skip_invalid: args.skip_invalid,
            external_limit: args.external_limit,
            no_parallel: args.no_parallel,
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Config file path given on the command line
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let non_empty = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());

        Ok(PartialSettings {
            inputs: (!args.inputs.is_empty()).then(|| args.inputs.clone()),
            output_format: args.output_format,
            output_file: args.output_file.clone(),
            exclude_patterns: non_empty(&args.exclude),
            extra_stdlib_modules: non_empty(&args.stdlib),
            skip_invalid_modules: args.skip_invalid.then_some(true),
            show_external_limit: args.external_limit,
            parallel: args.no_parallel.then_some(false),
            use_colors: args.no_colors.then_some(false),
            quiet: args.quiet.then_some(true),
            verbose: args.verbose.then_some(true),
        })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
