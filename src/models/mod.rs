//! Data models for dependency analysis

pub mod analysis;
pub mod config;
pub mod dependency;
pub mod dependency_graph;
pub mod module;

pub use analysis::{AnalysisReport, AnalysisResult, MetricValue, Statistics};
pub use config::{AnalyzerConfig, OutputFormat, PartialSettings, Settings};
pub use dependency::{DependencyRecord, DependencyType, ImportType};
pub use dependency_graph::{DependencyGraph, EdgeMap};
pub use module::Module;
