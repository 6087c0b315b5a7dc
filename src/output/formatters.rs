//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{ModgraphError, Result, ResultExt};
use crate::models::analysis::AnalysisReport;
use crate::models::dependency_graph::DependencyGraph;
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

/// Modules listed in the fan-out and fan-in sections
const TOP_MODULES: usize = 5;

/// Internal dependencies listed under each module
const DEPENDENCIES_PER_MODULE: usize = 3;

fn paint(style: Style, text: impl AsRef<str>, use_colors: bool) -> String {
    if use_colors {
        style.paint(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn heading(output: &mut String, title: &str, use_colors: bool) {
    output.push_str(&format!("\n{}\n", paint(Blue.bold(), title, use_colors)));
}

/// Format one analysis as a single summary line
pub fn format_report_line(report: &AnalysisReport, use_colors: bool) -> String {
    let stats = &report.result.statistics;
    let mut line = format!(
        "{}: {} dependencies ({} internal, {} external, {} stdlib), {} circular",
        report.input.display(),
        stats.total_dependencies,
        stats.internal_dependencies,
        stats.external_dependencies,
        stats.stdlib_dependencies,
        stats.circular_dependency_count,
    );

    if report.result.has_errors() {
        line.push_str(&format!(
            ", {}",
            paint(Red.bold(), format!("{} error{}", report.result.errors.len(), plural(report.result.errors.len())), use_colors)
        ));
    }

    line.push('\n');
    line
}

/// Format one analysis as a text report
pub fn format_report_text(
    report: &AnalysisReport,
    use_colors: bool,
    verbose: bool,
    external_limit: usize,
) -> String {
    let result = &report.result;
    let stats = &result.statistics;
    let graph = &result.graph;
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        paint(
            Blue.bold(),
            format!("Dependency Analysis: {}", report.input.display()),
            use_colors
        )
    ));
    output.push_str(&format!("Modules analysed: {}\n", report.module_count));

    heading(&mut output, "Dependency Statistics", use_colors);
    output.push_str(&format!("  Total dependencies: {}\n", stats.total_dependencies));
    output.push_str(&format!("  Internal dependencies: {}\n", stats.internal_dependencies));
    output.push_str(&format!("  External dependencies: {}\n", stats.external_dependencies));
    output.push_str(&format!("  Standard library dependencies: {}\n", stats.stdlib_dependencies));
    if stats.unique_external_modules > 0 {
        output.push_str(&format!("  Unique external packages: {}\n", stats.unique_external_modules));
    }
    if stats.max_dependency_depth > 0 {
        output.push_str(&format!("  Maximum dependency depth: {}\n", stats.max_dependency_depth));
        output.push_str(&format!("  Average dependency depth: {:.1}\n", stats.avg_dependency_depth));
    }
    if stats.max_fan_out > 0 {
        output.push_str(&format!("  Maximum fan-out: {} (dependencies from one module)\n", stats.max_fan_out));
    }
    if stats.max_fan_in > 0 {
        output.push_str(&format!("  Maximum fan-in: {} (modules depending on one module)\n", stats.max_fan_in));
    }

    if !graph.cycles.is_empty() {
        heading(&mut output, "Circular Dependencies Detected", use_colors);
        output.push_str(&format!(
            "Found {} circular dependency chain{}:\n",
            graph.cycles.len(),
            plural(graph.cycles.len())
        ));
        for (i, cycle) in graph.cycles.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, paint(Red.normal(), cycle.join(" -> "), use_colors)));
        }
        if verbose {
            let groups = graph.cycle_groups();
            output.push_str(&format!("Strongly connected groups: {}\n", groups.len()));
            for group in &groups {
                output.push_str(&format!("  {{{}}}\n", group.join(", ")));
            }
        }
    }

    format_external_usage(&mut output, graph, use_colors, external_limit);
    format_internal_structure(&mut output, graph, use_colors);

    if verbose {
        heading(&mut output, "All Metrics", use_colors);
        for (name, value) in stats.metrics() {
            output.push_str(&format!("  {}: {}\n", name, value));
        }

        if !result.warnings.is_empty() {
            heading(&mut output, "Warnings", use_colors);
            for warning in &result.warnings {
                output.push_str(&format!("  [{}] {}\n", paint(Yellow.normal(), "WARNING", use_colors), warning));
            }
        }
    }

    if result.has_errors() {
        heading(&mut output, "Dependency Analysis Errors", use_colors);
        for error in &result.errors {
            output.push_str(&format!("  [{}] {}\n", paint(Red.bold(), "ERROR", use_colors), error));
        }
    }

    output
}

fn format_external_usage(output: &mut String, graph: &DependencyGraph, use_colors: bool, limit: usize) {
    let usage = graph.external_usage();
    if usage.is_empty() || limit == 0 {
        return;
    }

    heading(output, "Most Common External Dependencies", use_colors);
    for (name, count) in usage.iter().take(limit) {
        output.push_str(&format!(
            "  - {} (used by {} module{})\n",
            paint(Cyan.normal(), name, use_colors),
            count,
            plural(*count)
        ));
    }
    if usage.len() > limit {
        output.push_str(&format!("  - ...and {} more\n", usage.len() - limit));
    }
}

fn format_internal_structure(output: &mut String, graph: &DependencyGraph, use_colors: bool) {
    let by_fan_out: Vec<_> = graph
        .modules_by_fan_out()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    if by_fan_out.is_empty() {
        return;
    }

    heading(output, "Modules With Most Dependencies", use_colors);
    for (module, count) in by_fan_out.iter().take(TOP_MODULES) {
        output.push_str(&format!(
            "  - {} -> {} dependenc{}\n",
            paint(Green.normal(), module, use_colors),
            count,
            if *count == 1 { "y" } else { "ies" }
        ));
        let dependencies = graph.internal_dependencies_of(module);
        for dependency in dependencies.iter().take(DEPENDENCIES_PER_MODULE) {
            output.push_str(&format!("      {}\n", dependency));
        }
        if dependencies.len() > DEPENDENCIES_PER_MODULE {
            output.push_str(&format!("      ...and {} more\n", dependencies.len() - DEPENDENCIES_PER_MODULE));
        }
    }

    let mut fan_in: Vec<_> = graph.fan_in().into_iter().collect();
    fan_in.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    heading(output, "Most Depended-upon Modules", use_colors);
    for (module, count) in fan_in.iter().take(TOP_MODULES) {
        output.push_str(&format!(
            "  - {} (imported by {} module{})\n",
            paint(Green.normal(), module, use_colors),
            count,
            plural(*count)
        ));
    }
}

/// Format reports as JSON: an object for a single report, an array otherwise
pub fn format_reports_json(reports: &[AnalysisReport], pretty: bool) -> Result<String> {
    let value = match reports {
        [report] => serde_json::to_value(report)?,
        reports => serde_json::to_value(reports)?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    json.map_err(|e| ModgraphError::JsonSerialize { source: e })
}

/// Format reports as CSV, one row per dependency record
pub fn format_reports_csv(reports: &[AnalysisReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "input",
        "source_module",
        "name",
        "target",
        "dependency_type",
        "import_type",
        "imported_items",
        "import_statement",
    ])?;

    for report in reports {
        let input = report.input.display().to_string();
        for record in &report.result.records {
            let imported_items = record.imported_items.join(";");
            writer.write_record([
                input.as_str(),
                record.source_module.as_str(),
                record.name.as_str(),
                record.target(),
                record.dependency_type.as_str(),
                record.import_type.as_str(),
                imported_items.as_str(),
                record.import_statement.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ModgraphError::io_error(e.into_error()))?;

    String::from_utf8(bytes).with_context(|| "CSV output is not valid UTF-8")
}

/// Format reports as Graphviz DOT, one digraph per report
pub fn format_reports_dot(reports: &[AnalysisReport]) -> String {
    reports
        .iter()
        .map(|report| format!("// {}\n{}", report.input.display(), report.result.graph.to_dot()))
        .collect::<Vec<_>>()
        .join("\n")
}
