//! Analysis result structures

use super::dependency::{DependencyRecord, DependencyType};
use super::dependency_graph::DependencyGraph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Outcome of analysing one module list
///
/// Always structurally valid: faults end up in `errors` and the graph holds
/// whatever was built before the fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub graph: DependencyGraph,
    pub records: Vec<DependencyRecord>,
    pub statistics: Statistics,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the analysis hit a fault
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records of one dependency type
    pub fn records_of(&self, dependency_type: DependencyType) -> impl Iterator<Item = &DependencyRecord> {
        self.records
            .iter()
            .filter(move |record| record.dependency_type == dependency_type)
    }

    /// Records declared by one module
    pub fn records_from<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a DependencyRecord> {
        self.records
            .iter()
            .filter(move |record| record.source_module == module)
    }
}

/// Summary metrics of an analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_dependencies: usize,
    pub internal_dependencies: usize,
    pub external_dependencies: usize,
    pub stdlib_dependencies: usize,
    pub unique_internal_modules: usize,
    pub unique_external_modules: usize,
    pub circular_dependency_count: usize,
    pub max_dependency_depth: usize,
    pub avg_dependency_depth: f64,
    pub max_fan_out: usize,
    pub avg_fan_out: f64,
    pub max_fan_in: usize,
    pub avg_fan_in: f64,
}

/// A single named metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Average(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(value) => write!(f, "{}", value),
            MetricValue::Average(value) => write!(f, "{:.2}", value),
        }
    }
}

impl Statistics {
    /// All metrics as ordered `(name, value)` pairs
    pub fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        use MetricValue::{Average, Count};

        vec![
            ("total_dependencies", Count(self.total_dependencies)),
            ("internal_dependencies", Count(self.internal_dependencies)),
            ("external_dependencies", Count(self.external_dependencies)),
            ("stdlib_dependencies", Count(self.stdlib_dependencies)),
            ("unique_internal_modules", Count(self.unique_internal_modules)),
            ("unique_external_modules", Count(self.unique_external_modules)),
            ("circular_dependency_count", Count(self.circular_dependency_count)),
            ("max_dependency_depth", Count(self.max_dependency_depth)),
            ("avg_dependency_depth", Average(self.avg_dependency_depth)),
            ("max_fan_out", Count(self.max_fan_out)),
            ("avg_fan_out", Average(self.avg_fan_out)),
            ("max_fan_in", Count(self.max_fan_in)),
            ("avg_fan_in", Average(self.avg_fan_in)),
        ]
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.metrics()
            .into_iter()
            .find(|(metric, _)| *metric == name)
            .map(|(_, value)| value)
    }
}

/// Analysis of one input file, as written by the JSON formatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Module list the analysis was run on
    pub input: PathBuf,
    pub module_count: usize,
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(input: impl Into<PathBuf>, module_count: usize, result: AnalysisResult) -> Self {
        Self {
            input: input.into(),
            module_count,
            analyzed_at: chrono::Utc::now(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dependency::ImportType;

    #[test]
    fn test_default_statistics_have_every_metric() {
        let stats = Statistics::default();
        let metrics = stats.metrics();

        assert_eq!(metrics.len(), 13);
        assert_eq!(stats.get("total_dependencies"), Some(MetricValue::Count(0)));
        assert_eq!(stats.get("avg_fan_in"), Some(MetricValue::Average(0.0)));
        assert_eq!(stats.get("no_such_metric"), None);
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(MetricValue::Count(4).to_string(), "4");
        assert_eq!(MetricValue::Average(1.0 / 3.0).to_string(), "0.33");
    }

    #[test]
    fn test_records_filters() {
        let mut result = AnalysisResult::new();
        let mut record = DependencyRecord::new("os", ImportType::Module, "main", "import os", vec![]);
        record.dependency_type = DependencyType::Stdlib;
        result.records.push(record);
        let mut record = DependencyRecord::new("utils", ImportType::Module, "lib", "import utils", vec![]);
        record.dependency_type = DependencyType::Internal;
        result.records.push(record);

        assert_eq!(result.records_of(DependencyType::Stdlib).count(), 1);
        assert_eq!(result.records_from("lib").count(), 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_statistics_serialize_by_name() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        assert_eq!(json["max_dependency_depth"], 0);
        assert_eq!(json["avg_dependency_depth"], 0.0);
    }
}
