//! Core functionality for building and analysing module dependency graphs

pub mod analyzer;
pub mod classifier;
pub mod cycles;
pub mod depth;
pub mod graph_builder;
pub mod parallel;
pub mod statistics;
pub mod stdlib;

pub use analyzer::{analyze_modules, DependencyAnalyzer};
pub use classifier::{ClassificationRule, DependencyClassifier};
pub use cycles::detect_cycles;
pub use depth::calculate_depths;
pub use graph_builder::GraphBuilder;
pub use parallel::{analyze_file, analyze_inputs};
pub use statistics::calculate_statistics;
