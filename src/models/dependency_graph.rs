//! Dependency graph data structures

use super::dependency::DependencyType;
use indexmap::IndexMap;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Module name to ordered, duplicate-free list of target names
///
/// Source modules keep the order in which they first gained an edge, which
/// is the order modules were given. Cycle detection starts from them in
/// that order.
pub type EdgeMap = IndexMap<String, Vec<String>>;

/// Maximum number of external nodes drawn in DOT output
const DOT_EXTERNAL_NODE_LIMIT: usize = 20;
/// Maximum number of external edges drawn in DOT output
const DOT_EXTERNAL_EDGE_LIMIT: usize = 11;
/// Maximum number of external edges drawn per module in DOT output
const DOT_EXTERNAL_EDGES_PER_MODULE: usize = 3;

/// Complete dependency graph of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Internal module -> internal modules it imports
    pub internal_edges: EdgeMap,

    /// Internal module -> third-party packages it imports
    pub external_edges: EdgeMap,

    /// Internal module -> standard library modules it imports
    pub stdlib_edges: EdgeMap,

    /// Cycles found in `internal_edges`; first and last names are equal
    pub cycles: Vec<Vec<String>>,

    /// Longest internal dependency chain reachable from each module
    pub depth: BTreeMap<String, usize>,

    /// Every internal module referenced as a dependency target
    pub all_internal_nodes: BTreeSet<String>,

    /// Every external package referenced as a dependency target
    pub all_external_nodes: BTreeSet<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge of the given kind
    ///
    /// Returns `false` if the edge was already present. Unknown records are
    /// not graph edges and are ignored.
    pub fn add_edge(
        &mut self,
        dependency_type: DependencyType,
        source: &str,
        target: &str,
    ) -> bool {
        let edges = match dependency_type {
            DependencyType::Internal => {
                self.all_internal_nodes.insert(target.to_string());
                &mut self.internal_edges
            }
            DependencyType::External => {
                self.all_external_nodes.insert(target.to_string());
                &mut self.external_edges
            }
            DependencyType::Stdlib => &mut self.stdlib_edges,
            DependencyType::Unknown => return false,
        };

        let targets = edges.entry(source.to_string()).or_default();
        if targets.iter().any(|existing| existing == target) {
            return false;
        }
        targets.push(target.to_string());
        true
    }

    /// Internal modules imported by `module`
    pub fn internal_dependencies_of(&self, module: &str) -> &[String] {
        self.internal_edges
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of internal modules importing each internal target
    pub fn fan_in(&self) -> BTreeMap<&str, usize> {
        let mut fan_in = BTreeMap::new();
        for targets in self.internal_edges.values() {
            for target in targets {
                *fan_in.entry(target.as_str()).or_insert(0) += 1;
            }
        }
        fan_in
    }

    /// Modules sorted by number of internal dependencies, highest first
    pub fn modules_by_fan_out(&self) -> Vec<(&str, usize)> {
        let mut modules: Vec<_> = self
            .internal_edges
            .iter()
            .map(|(module, targets)| (module.as_str(), targets.len()))
            .collect();
        modules.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        modules
    }

    /// External packages with the number of modules using each, most used first
    pub fn external_usage(&self) -> Vec<(&str, usize)> {
        let mut usage: HashMap<&str, usize> = HashMap::new();
        for targets in self.external_edges.values() {
            for target in targets {
                *usage.entry(target.as_str()).or_insert(0) += 1;
            }
        }

        let mut usage: Vec<_> = usage.into_iter().collect();
        usage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        usage
    }

    /// Build a petgraph view of the internal edges
    pub fn to_petgraph(&self) -> (DiGraph<String, ()>, HashMap<String, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        for (source, targets) in &self.internal_edges {
            let from = *indices
                .entry(source.clone())
                .or_insert_with(|| graph.add_node(source.clone()));
            for target in targets {
                let to = *indices
                    .entry(target.clone())
                    .or_insert_with(|| graph.add_node(target.clone()));
                graph.add_edge(from, to, ());
            }
        }

        (graph, indices)
    }

    /// Groups of mutually dependent modules
    ///
    /// Each strongly connected component with more than one module, or a
    /// single module importing itself, is reported once with its names
    /// sorted. Unlike `cycles`, a group is never repeated.
    pub fn cycle_groups(&self) -> Vec<Vec<String>> {
        let (graph, _) = self.to_petgraph();

        let mut groups: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&node| graph.contains_edge(node, node))
            })
            .map(|component| {
                let mut names: Vec<String> =
                    component.into_iter().map(|node| graph[node].clone()).collect();
                names.sort();
                names
            })
            .collect();

        groups.sort();
        groups
    }

    /// Export to Graphviz DOT format
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph dependencies {\n");
        dot.push_str("    rankdir=TB;\n");
        dot.push_str("    node [shape=box, style=rounded];\n");
        dot.push_str("    edge [arrowhead=vee];\n\n");

        dot.push_str("    // Internal modules\n");
        let mut internal: BTreeSet<&str> = self.internal_edges.keys().map(String::as_str).collect();
        internal.extend(self.all_internal_nodes.iter().map(String::as_str));
        for module in internal {
            let color = match self.depth.get(module).copied().unwrap_or(0) {
                0 => "lightblue",
                1..=2 => "lightgreen",
                _ => "lightyellow",
            };
            dot.push_str(&format!(
                "    \"{}\" [label=\"{}\", fillcolor={}, style=\"rounded,filled\"];\n",
                escape(module),
                escape(short_label(module)),
                color
            ));
        }

        dot.push_str("\n    // External modules\n");
        for module in self.all_external_nodes.iter().take(DOT_EXTERNAL_NODE_LIMIT) {
            dot.push_str(&format!(
                "    \"ext:{}\" [label=\"{}\", fillcolor=lightcoral, style=\"rounded,filled\"];\n",
                escape(module),
                escape(short_label(module))
            ));
        }

        dot.push_str("\n    // Internal dependencies\n");
        for (source, targets) in &self.internal_edges {
            for target in targets {
                dot.push_str(&format!(
                    "    \"{}\" -> \"{}\" [color=blue];\n",
                    escape(source),
                    escape(target)
                ));
            }
        }

        dot.push_str("\n    // External dependencies (sample)\n");
        let drawn: BTreeSet<&str> = self
            .all_external_nodes
            .iter()
            .take(DOT_EXTERNAL_NODE_LIMIT)
            .map(String::as_str)
            .collect();
        let mut external_count = 0;
        'modules: for (source, targets) in &self.external_edges {
            let sample = targets
                .iter()
                .filter(|target| drawn.contains(target.as_str()))
                .take(DOT_EXTERNAL_EDGES_PER_MODULE);
            for target in sample {
                if external_count >= DOT_EXTERNAL_EDGE_LIMIT {
                    break 'modules;
                }
                dot.push_str(&format!(
                    "    \"{}\" -> \"ext:{}\" [color=red, style=dashed];\n",
                    escape(source),
                    escape(target)
                ));
                external_count += 1;
            }
        }

        if !self.cycles.is_empty() {
            dot.push_str("\n    // Circular dependencies\n");
            for cycle in &self.cycles {
                for pair in cycle.windows(2) {
                    dot.push_str(&format!(
                        "    \"{}\" -> \"{}\" [color=red, penwidth=3, label=\"CYCLE\"];\n",
                        escape(&pair[0]),
                        escape(&pair[1])
                    ));
                }
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Last dotted segment of a module name
fn short_label(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
