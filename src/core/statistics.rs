//! Summary statistics over a finished analysis

use crate::models::analysis::Statistics;
use crate::models::dependency::{DependencyRecord, DependencyType};
use crate::models::dependency_graph::DependencyGraph;

/// Compute the statistics of a set of records and the graph built from them
pub fn calculate_statistics(records: &[DependencyRecord], graph: &DependencyGraph) -> Statistics {
    let count = |kind: DependencyType| records.iter().filter(|r| r.dependency_type == kind).count();

    let depths: Vec<usize> = graph.depth.values().copied().collect();
    let fan_out: Vec<usize> = graph
        .internal_edges
        .values()
        .map(Vec::len)
        .filter(|&n| n > 0)
        .collect();
    let fan_in: Vec<usize> = graph.fan_in().into_values().collect();

    Statistics {
        total_dependencies: records.len(),
        internal_dependencies: count(DependencyType::Internal),
        external_dependencies: count(DependencyType::External),
        stdlib_dependencies: count(DependencyType::Stdlib),
        unique_internal_modules: graph.all_internal_nodes.len(),
        unique_external_modules: graph.all_external_nodes.len(),
        circular_dependency_count: graph.cycles.len(),
        max_dependency_depth: max(&depths),
        avg_dependency_depth: average(&depths),
        max_fan_out: max(&fan_out),
        avg_fan_out: average(&fan_out),
        max_fan_in: max(&fan_in),
        avg_fan_in: average(&fan_in),
    }
}

fn max(values: &[usize]) -> usize {
    values.iter().copied().max().unwrap_or(0)
}

fn average(values: &[usize]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    }
}
