//! Dependency graph construction from import statements

use super::classifier::DependencyClassifier;
use crate::models::dependency::{DependencyRecord, DependencyType};
use crate::models::dependency_graph::DependencyGraph;
use crate::models::module::Module;
use crate::parsers::import_statement::ImportStatementParser;
use crate::utils::module_name_mapper::ModuleNameMapper;
use crate::utils::relative_resolver::RelativeImportResolver;
use std::collections::HashSet;

/// Builds the edge maps of a dependency graph, one module at a time
///
/// Every statement goes through parse, relative resolution, classification
/// and, for internal dependencies, canonical name lookup before its target
/// is added to the edge map of its category.
pub struct GraphBuilder<'a> {
    parser: ImportStatementParser,
    resolver: RelativeImportResolver,
    classifier: &'a DependencyClassifier,
    internal_modules: HashSet<String>,
    mapper: ModuleNameMapper,
    graph: DependencyGraph,
    records: Vec<DependencyRecord>,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder that treats `modules` as the project's internal modules
    ///
    /// Modules with invalid names do not take part in name resolution.
    pub fn new(classifier: &'a DependencyClassifier, modules: &[Module]) -> Self {
        let valid: Vec<Module> = modules
            .iter()
            .filter(|module| module.validate().is_ok())
            .cloned()
            .collect();

        Self {
            parser: ImportStatementParser::new(),
            resolver: RelativeImportResolver::new(),
            classifier,
            internal_modules: valid.iter().map(|module| module.name.clone()).collect(),
            mapper: ModuleNameMapper::from_modules(&valid),
            graph: DependencyGraph::new(),
            records: Vec::new(),
        }
    }

    /// Canonical names of the internal modules
    pub fn internal_modules(&self) -> &HashSet<String> {
        &self.internal_modules
    }

    /// Turn one statement into fully classified records
    pub fn process_statement(&self, statement: &str, source_module: &str) -> Vec<DependencyRecord> {
        let mut records = self.parser.parse(statement, source_module);

        for record in &mut records {
            if record.is_relative() {
                record.name = self.resolver.resolve(&record.name, &record.source_module);
            }

            record.dependency_type = self.classifier.classify(&record.name, &self.internal_modules);

            if record.dependency_type == DependencyType::Internal {
                record.resolved_path = self.mapper.canonical(&record.name).map(str::to_string);
            }
        }

        records
    }

    /// Process every statement of a module, returning how many records it produced
    pub fn add_module(&mut self, module: &Module) -> usize {
        let mut added = 0;

        for statement in &module.imports {
            for record in self.process_statement(statement, &module.name) {
                self.graph
                    .add_edge(record.dependency_type, &record.source_module, record.target());
                self.records.push(record);
                added += 1;
            }
        }

        added
    }

    /// Graph built so far
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Records produced so far, in statement order
    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    /// Consume the builder
    pub fn finish(self) -> (DependencyGraph, Vec<DependencyRecord>) {
        (self.graph, self.records)
    }
}
