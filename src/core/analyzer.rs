//! Module dependency analysis
//!
//! `DependencyAnalyzer::analyze` is the single entry point of the core. It
//! never fails: faults are recorded in the returned result's `errors`, next
//! to whatever graph had been built by then.

use super::classifier::DependencyClassifier;
use super::cycles::detect_cycles;
use super::depth::calculate_depths;
use super::graph_builder::GraphBuilder;
use super::statistics::calculate_statistics;
use crate::error::{handle_error, Result};
use crate::models::analysis::AnalysisResult;
use crate::models::config::AnalyzerConfig;
use crate::models::module::Module;
use tracing::{debug, error, warn};

/// Analyzer turning module records into a dependency graph with statistics
///
/// Holds no per-run state, so one analyzer can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct DependencyAnalyzer {
    classifier: DependencyClassifier,
    config: AnalyzerConfig,
}

impl DependencyAnalyzer {
    /// Analyzer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with the given settings
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            classifier: DependencyClassifier::with_extra_stdlib(config.extra_stdlib_modules.iter().cloned()),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn classifier(&self) -> &DependencyClassifier {
        &self.classifier
    }

    /// Analyze the dependencies between `modules`
    pub fn analyze(&self, modules: &[Module]) -> AnalysisResult {
        let mut result = AnalysisResult::new();

        if let Err(err) = self.run(modules, &mut result) {
            let message = format!("Dependency analysis failed: {}", err);
            error!("{}", message);
            result.errors.push(message);
        }

        result.statistics = calculate_statistics(&result.records, &result.graph);

        debug!(
            modules = modules.len(),
            records = result.statistics.total_dependencies,
            internal_edges = result.graph.internal_edges.len(),
            cycles = result.statistics.circular_dependency_count,
            "dependency analysis finished"
        );

        result
    }

    fn run(&self, modules: &[Module], result: &mut AnalysisResult) -> Result<()> {
        let modules = self.select_modules(modules, &mut result.warnings)?;

        let mut builder = GraphBuilder::new(&self.classifier, &modules);
        let outcome: Result<()> = modules.iter().try_for_each(|module| {
            module.validate()?;
            builder.add_module(module);
            Ok(())
        });

        let (graph, records) = builder.finish();
        result.graph = graph;
        result.records = records;
        outcome?;

        result.graph.cycles = detect_cycles(&result.graph.internal_edges);
        result.graph.depth = calculate_depths(&result.graph.internal_edges);

        for cycle in &result.graph.cycles {
            let chain = cycle.join(" -> ");
            warn!("circular dependency: {}", chain);
            result
                .warnings
                .push(format!("Circular dependency detected: {}", chain));
        }

        Ok(())
    }

    /// Drop excluded modules, and invalid ones when configured to skip them
    fn select_modules(&self, modules: &[Module], warnings: &mut Vec<String>) -> Result<Vec<Module>> {
        let patterns = self
            .config
            .exclude_patterns
            .iter()
            .map(|pattern| glob::Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut selected = Vec::with_capacity(modules.len());
        for module in modules {
            if patterns.iter().any(|pattern| pattern.matches(&module.name)) {
                debug!(module = %module.name, "excluded by pattern");
                continue;
            }

            if self.config.skip_invalid_modules {
                if let Err(err) = module.validate() {
                    warnings.push(format!("Skipped module: {}", err));
                    handle_error(err);
                    continue;
                }
            }

            selected.push(module.clone());
        }

        Ok(selected)
    }
}

/// Analyze `modules` with default settings
pub fn analyze_modules(modules: &[Module]) -> AnalysisResult {
    DependencyAnalyzer::new().analyze(modules)
}
