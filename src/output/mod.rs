//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::formatters::{
    format_report_line, format_report_text, format_reports_csv, format_reports_dot, format_reports_json,
};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::AnalysisReport;
use crate::models::config::{OutputFormat, Settings};

/// Trait for different output formatters
pub trait Formatter {
    /// Format the reports of one run into a string
    fn format(&self, reports: &[AnalysisReport]) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub external_limit: usize,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
            external_limit: 10,
        }
    }

    /// Set how many external packages are listed
    pub fn with_external_limit(mut self, limit: usize) -> Self {
        self.external_limit = limit;
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, reports: &[AnalysisReport]) -> Result<String> {
        // In quiet mode, one summary line per input
        if self.quiet {
            return Ok(reports
                .iter()
                .map(|report| formatters::format_report_line(report, self.use_colors))
                .collect());
        }

        Ok(reports
            .iter()
            .map(|report| {
                formatters::format_report_text(report, self.use_colors, self.verbose, self.external_limit)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, reports: &[AnalysisReport]) -> Result<String> {
        formatters::format_reports_json(reports, self.pretty)
    }
}

/// CSV formatter, one row per dependency record
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, reports: &[AnalysisReport]) -> Result<String> {
        formatters::format_reports_csv(reports)
    }
}

/// Graphviz DOT formatter
pub struct DotFormatter;

impl Formatter for DotFormatter {
    fn format(&self, reports: &[AnalysisReport]) -> Result<String> {
        Ok(formatters::format_reports_dot(reports))
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: &OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Dot => Box::new(DotFormatter),
    }
}

/// Create the formatter described by `settings`
pub fn formatter_for(settings: &Settings) -> Box<dyn Formatter> {
    match settings.output_format {
        OutputFormat::Text => Box::new(
            TextFormatter::new(settings.use_colors, settings.verbose, settings.quiet)
                .with_external_limit(settings.show_external_limit),
        ),
        format => create_formatter(&format, settings.use_colors, settings.verbose, settings.quiet),
    }
}
