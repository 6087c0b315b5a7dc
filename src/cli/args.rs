//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// modgraph - module dependency graph analyzer
#[derive(Parser, Debug, Default)]
#[command(name = "modgraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build and analyse the import dependency graph of a set of modules")]
#[command(long_about = "modgraph reads module lists (JSON records of a module name, its path and its import \
statements), classifies every import as internal, external or standard library, and reports the \
resulting dependency graph: circular dependencies, dependency depth, fan-in/fan-out and usage of \
external packages.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyse one module list
    modgraph modules.json

    # Analyse several lists independently
    modgraph app.json tools.json

Output Options:
    # JSON report for further processing
    modgraph modules.json --output json

    # One CSV row per import
    modgraph modules.json --output csv --output-file deps.csv

    # Graphviz source of the dependency graph
    modgraph modules.json --output dot | dot -Tsvg > deps.svg

Analysis Options:
    # Leave test modules out of the graph
    modgraph modules.json --exclude 'tests.*'

    # Treat extra top-level names as standard library
    modgraph modules.json --stdlib six --stdlib typing_extensions

    # Skip malformed module records instead of failing
    modgraph modules.json --skip-invalid

Configuration:
    # Use a specific configuration file
    modgraph --config ./modgraph.toml

    # Create a default .modgraph.toml in the current directory
    modgraph --init

Logging:
    # Debug logging on stderr
    modgraph modules.json --verbose

    # Fine-grained filters
    MODGRAPH_LOG=modgraph::core=debug modgraph modules.json
")]
pub struct Args {
    /// Module list files to analyse
    #[arg(value_name = "INPUT", help = "JSON module list files to analyse (defaults to the inputs of the config file)")]
    pub inputs: Vec<PathBuf>,

    /// Output format (text, json, csv, dot)
    #[arg(short, long, value_enum, help = "Output format: 'text' for a readable report, 'json' for machine processing, 'csv' for one row per import, 'dot' for Graphviz")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Exclude modules matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns on module names to leave out (can be specified multiple times, e.g., --exclude 'tests.*')")]
    pub exclude: Vec<String>,

    /// Extra standard library names
    #[arg(long, value_name = "NAME", help = "Top-level names to treat as standard library in addition to the built-in list (can be specified multiple times)")]
    pub stdlib: Vec<String>,

    /// Skip invalid module records
    #[arg(long, help = "Skip modules with an empty name or empty dotted segments instead of failing the analysis")]
    pub skip_invalid: bool,

    /// Number of external packages listed in the text report
    #[arg(long, value_name = "N", help = "Number of most used external packages listed in the text report (default: 10)")]
    pub external_limit: Option<usize>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only the report and errors are printed)")]
    pub quiet: bool,

    /// Show detailed output and debug logging
    #[arg(short, long, help = "Show detailed output and debug logging")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .modgraph.toml in the current or home directory)")]
    pub config: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Analyse inputs one after another instead of in parallel")]
    pub no_parallel: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.modgraph.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per import
    Csv,
    /// Graphviz DOT output
    Dot,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
