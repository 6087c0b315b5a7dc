//! modgraph - module dependency graph analysis
//!
//! Takes modules described by a name and the text of their import
//! statements, and builds the dependency graph between them: every import
//! is parsed, relative imports are resolved, and each dependency is
//! classified as internal, external or standard library. The graph is then
//! checked for circular dependencies and summarised with depth and
//! fan-in/fan-out statistics.
//!
//! ```
//! use modgraph::{analyze, Module};
//!
//! let modules = vec![
//!     Module::with_imports("app.main", &["import os", "from .util import helper"]),
//!     Module::with_imports("app.util", &[]),
//! ];
//! let result = analyze(&modules);
//!
//! assert_eq!(result.graph.internal_edges["app.main"], vec!["app.util".to_string()]);
//! assert_eq!(result.statistics.stdlib_dependencies, 1);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

pub use crate::core::{DependencyAnalyzer, DependencyClassifier};
pub use error::{handle_error, ErrorSeverity, ModgraphError, Result, ResultExt};
pub use models::{
    AnalysisReport, AnalysisResult, AnalyzerConfig, DependencyGraph, DependencyRecord, DependencyType,
    ImportType, Module, Settings, Statistics,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Analyze `modules` with default settings
pub fn analyze(modules: &[Module]) -> AnalysisResult {
    crate::core::analyze_modules(modules)
}
