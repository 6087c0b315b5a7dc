//! Command implementations

use std::path::PathBuf;

use super::Args;
use crate::config::{self, file::DEFAULT_CONFIG_FILE, CliArgs};
use crate::core::{analyze_inputs, DependencyAnalyzer};
use crate::error::{ErrorSeverity, ModgraphError, Result};
use crate::models::analysis::AnalysisReport;
use crate::output::{create_writer, formatter_for};
use tracing::{debug, info};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the module lists named by the arguments and config
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

/// How a completed analysis run went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every input was analysed without errors
    Clean,
    /// At least one analysis recorded errors
    AnalysisErrors,
    /// At least one input could not be loaded
    InputFailures,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::AnalysisErrors => 1,
            Outcome::InputFailures => 2,
        }
    }
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<Outcome> {
        match self {
            Command::Analyze(args) => analyze(args),
            Command::Init => {
                init(PathBuf::from(DEFAULT_CONFIG_FILE))?;
                Ok(Outcome::Clean)
            }
        }
    }

    /// Run the command and handle errors
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(outcome) => outcome.exit_code(),
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());

                match err.severity() {
                    ErrorSeverity::Warning => 0,
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

fn analyze(args: &Args) -> Result<Outcome> {
    let settings = config::load_config(CliArgs::from(args))?;
    debug!(?settings, "configuration loaded");

    if settings.inputs.is_empty() {
        return Err(ModgraphError::config_error(
            "No module list given. Pass one or more JSON files or set `inputs` in the config file.",
        ));
    }

    let analyzer = DependencyAnalyzer::with_config(settings.analyzer.clone());
    let results = analyze_inputs(&analyzer, settings.inputs.clone(), settings.parallel);

    let mut reports: Vec<AnalysisReport> = Vec::with_capacity(results.len());
    let mut failed = false;
    for (input, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                eprintln!("{}: {}: {}", err.severity(), input.display(), err.user_message());
                failed = true;
            }
        }
    }

    if !reports.is_empty() {
        let formatted = formatter_for(&settings).format(&reports)?;
        create_writer(settings.output_file.as_ref()).write(&formatted)?;

        if let Some(path) = &settings.output_file {
            if !settings.quiet {
                eprintln!("Results written to: {}", path.display());
            }
        }
    }

    let with_errors = reports.iter().filter(|report| report.result.has_errors()).count();
    info!(
        analysed = reports.len(),
        with_errors,
        failed_inputs = failed,
        "run finished"
    );

    Ok(if failed {
        Outcome::InputFailures
    } else if with_errors > 0 {
        Outcome::AnalysisErrors
    } else {
        Outcome::Clean
    })
}

fn init(config_path: PathBuf) -> Result<()> {
    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("\nConfiguration options:");
    println!("  - inputs: Module list files to analyse");
    println!("  - output_format: Output format (text, json, csv, dot)");
    println!("  - exclude_patterns: Glob patterns on module names to leave out");
    println!("  - extra_stdlib_modules: Extra names treated as standard library");
    println!("  - skip_invalid_modules: Skip malformed module records instead of failing");

    Ok(())
}
