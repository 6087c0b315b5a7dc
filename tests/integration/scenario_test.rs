//! Behaviour of the analyzer on small hand-built projects

use modgraph::{analyze, DependencyType, ImportType, Module};

#[test]
fn test_mixed_imports() {
    let modules = vec![
        Module::with_imports("main", &["import os", "import requests", "from .utils import helper"]),
        Module::with_imports("utils", &[]),
    ];

    let result = analyze(&modules);

    assert!(result.errors.is_empty());
    assert_eq!(result.graph.internal_edges["main"], vec!["utils".to_string()]);
    assert_eq!(result.graph.stdlib_edges["main"], vec!["os".to_string()]);
    assert_eq!(result.graph.external_edges["main"], vec!["requests".to_string()]);
    assert_eq!(result.statistics.total_dependencies, 3);
    assert_eq!(result.statistics.internal_dependencies, 1);
    assert_eq!(result.statistics.external_dependencies, 1);
    assert_eq!(result.statistics.stdlib_dependencies, 1);

    let relative = result
        .records
        .iter()
        .find(|record| record.import_type == ImportType::Relative)
        .unwrap();
    assert_eq!(relative.name, "utils");
    assert_eq!(relative.resolved_path.as_deref(), Some("utils"));
    assert_eq!(relative.imported_items, vec!["helper".to_string()]);
}

#[test]
fn test_mutual_cycle() {
    let modules = vec![
        Module::with_imports("a", &["import b"]),
        Module::with_imports("b", &["import a"]),
    ];

    let result = analyze(&modules);

    assert!(!result.graph.cycles.is_empty());
    assert!(result
        .graph
        .cycles
        .iter()
        .any(|cycle| cycle.len() == 3 && cycle.first() == cycle.last()));
    assert!(result
        .warnings
        .iter()
        .any(|warning| warning.starts_with("Circular dependency detected")));
    assert!(result.errors.is_empty());
    assert_eq!(result.statistics.circular_dependency_count, result.graph.cycles.len());
}

#[test]
fn test_chain_depth() {
    let modules = vec![
        Module::with_imports("a", &["import b"]),
        Module::with_imports("b", &["import c"]),
        Module::with_imports("c", &[]),
    ];

    let result = analyze(&modules);

    assert!(result.graph.cycles.is_empty());
    assert_eq!(result.graph.depth["a"], 2);
    assert_eq!(result.graph.depth["b"], 1);
    assert_eq!(result.graph.depth["c"], 0);
    assert_eq!(result.statistics.max_dependency_depth, 2);
}

#[test]
fn test_invalid_identifier_is_ignored() {
    let modules = vec![Module::with_imports("main", &["import 123invalid"])];

    let result = analyze(&modules);

    assert!(result.records.is_empty());
    assert!(result.errors.is_empty());
    assert_eq!(result.statistics.total_dependencies, 0);
}

#[test]
fn test_module_without_imports() {
    let modules = vec![
        Module::with_imports("pkg.quiet", &[]),
        Module::with_imports("pkg.loud", &["import json"]),
    ];

    let result = analyze(&modules);

    assert!(result.records_from("pkg.quiet").next().is_none());
    assert!(!result.graph.internal_edges.contains_key("pkg.quiet"));
    assert!(!result.graph.stdlib_edges.contains_key("pkg.quiet"));
    assert_eq!(result.statistics.total_dependencies, 1);
}

#[test]
fn test_nested_package_resolution() {
    let modules = vec![
        Module::with_imports(
            "pkg.sub.mod",
            &["from . import sibling", "from ..core import engine", "from ....core import engine"],
        ),
        Module::with_imports("pkg.sub.sibling", &[]),
        Module::with_imports("pkg.core", &[]),
    ];

    let result = analyze(&modules);
    let names: Vec<&str> = result.records.iter().map(|record| record.name.as_str()).collect();

    assert_eq!(names, vec!["pkg.sub", "pkg.core", "core"]);
    assert!(result
        .records
        .iter()
        .all(|record| record.import_type == ImportType::Relative));
    assert_eq!(
        result.graph.internal_edges["pkg.sub.mod"],
        vec!["pkg.sub".to_string(), "pkg.core".to_string()]
    );
}

#[test]
fn test_suffix_spellings_resolve_to_canonical_module() {
    let modules = vec![
        Module::with_imports("app.main", &["import models", "from services.billing import charge"]),
        Module::with_imports("app.models", &[]),
        Module::with_imports("app.services.billing", &[]),
    ];

    let result = analyze(&modules);

    assert_eq!(
        result.graph.internal_edges["app.main"],
        vec!["app.models".to_string(), "app.services.billing".to_string()]
    );
    assert!(result
        .records
        .iter()
        .all(|record| record.dependency_type == DependencyType::Internal));
}

#[test]
fn test_repeated_imports_do_not_duplicate_edges() {
    let modules = vec![
        Module::with_imports("a", &["import b", "from b import thing", "import numpy", "import numpy"]),
        Module::with_imports("b", &[]),
    ];

    let result = analyze(&modules);

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.graph.internal_edges["a"], vec!["b".to_string()]);
    assert_eq!(result.graph.external_edges["a"], vec!["numpy".to_string()]);
    assert_eq!(result.statistics.unique_external_modules, 1);
}

#[test]
fn test_self_import_is_kept() {
    let modules = vec![Module::with_imports("loop", &["import loop"])];

    let result = analyze(&modules);

    assert_eq!(result.graph.internal_edges["loop"], vec!["loop".to_string()]);
    assert!(result
        .graph
        .cycles
        .iter()
        .any(|cycle| cycle == &vec!["loop".to_string(), "loop".to_string()]));
}
