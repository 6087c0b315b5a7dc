//! End-to-end tests for modgraph
//!
//! These tests write module lists to disk, run them through the analyzer and
//! check the rendered reports.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use modgraph::{
    core::{analyze_file, analyze_inputs, DependencyAnalyzer},
    error::Result,
    models::AnalyzerConfig,
    output::{CsvFormatter, DotFormatter, Formatter, JsonFormatter, TextFormatter},
};

/// Write a small web application split into packages
fn create_web_app(base_dir: &Path) -> Result<PathBuf> {
    let path = base_dir.join("webapp.json");
    fs::write(&path, r#"{
        "modules": [
            {
                "name": "webapp.app",
                "path": "webapp/app.py",
                "imports": [
                    "import os",
                    "import logging",
                    "from flask import Flask, jsonify",
                    "from .routes import register",
                    "from .db.session import Session as DbSession"
                ]
            },
            {
                "name": "webapp.routes",
                "path": "webapp/routes.py",
                "imports": [
                    "from flask import Blueprint",
                    "from .services.users import UserService",
                    "from webapp.db.models import User"
                ]
            },
            {
                "name": "webapp.services.users",
                "path": "webapp/services/users.py",
                "imports": [
                    "from ..db.models import User",
                    "from ..db.session import Session",
                    "import requests",
                    "import json"
                ]
            },
            {
                "name": "webapp.db.models",
                "path": "webapp/db/models.py",
                "imports": ["from sqlalchemy import Column, Integer", "from .session import Base"]
            },
            {
                "name": "webapp.db.session",
                "path": "webapp/db/session.py",
                "imports": ["from sqlalchemy.orm import sessionmaker"]
            },
            {
                "name": "tests.test_users",
                "path": "tests/test_users.py",
                "imports": ["import pytest", "from webapp.services.users import UserService"]
            }
        ]
    }"#)?;
    Ok(path)
}

/// Write a module list whose modules import each other in a ring
fn create_ring(base_dir: &Path, name: &str, size: usize) -> Result<PathBuf> {
    let modules: Vec<serde_json::Value> = (0..size)
        .map(|i| {
            serde_json::json!({
                "name": format!("ring.m{}", i),
                "path": format!("ring/m{}.py", i),
                "imports": [format!("from .m{} import run", (i + 1) % size), format!("import ring.m{}", (i + 1) % size)],
            })
        })
        .collect();

    let path = base_dir.join(name);
    fs::write(&path, serde_json::to_string(&modules)?)?;
    Ok(path)
}

#[test]
fn test_web_app_analysis() {
    let temp_dir = tempdir().unwrap();
    let input = create_web_app(temp_dir.path()).unwrap();

    let report = analyze_file(&DependencyAnalyzer::new(), &input).unwrap();
    let result = &report.result;

    assert_eq!(report.module_count, 6);
    assert!(result.errors.is_empty());
    assert!(result.graph.cycles.is_empty());

    assert_eq!(
        result.graph.internal_edges["webapp.app"],
        vec!["webapp.routes".to_string(), "webapp.db.session".to_string()]
    );
    assert_eq!(
        result.graph.internal_edges["webapp.services.users"],
        vec!["webapp.db.models".to_string(), "webapp.db.session".to_string()]
    );
    assert_eq!(
        result.graph.external_edges["webapp.app"],
        vec!["flask".to_string()]
    );
    assert_eq!(
        result.graph.stdlib_edges["webapp.services.users"],
        vec!["json".to_string()]
    );
    assert_eq!(result.graph.stdlib_edges["tests.test_users"], vec!["pytest".to_string()]);

    // routes -> services.users -> db.models -> db.session
    assert_eq!(result.graph.depth["webapp.app"], 4);
    assert_eq!(result.graph.depth["webapp.routes"], 3);
    assert_eq!(result.graph.depth["webapp.db.models"], 1);
    assert_eq!(result.statistics.max_dependency_depth, 4);

    assert_eq!(result.statistics.total_dependencies, 17);
    assert_eq!(result.statistics.external_dependencies, 5);
    assert_eq!(result.statistics.stdlib_dependencies, 4);
    assert_eq!(result.statistics.internal_dependencies, 8);
    assert_eq!(result.statistics.unique_external_modules, 4);
}

#[test]
fn test_exclude_patterns_drop_modules() {
    let temp_dir = tempdir().unwrap();
    let input = create_web_app(temp_dir.path()).unwrap();

    let analyzer = DependencyAnalyzer::with_config(AnalyzerConfig {
        exclude_patterns: vec!["tests.*".to_string()],
        ..Default::default()
    });
    let report = analyze_file(&analyzer, &input).unwrap();

    assert!(report.result.records_from("tests.test_users").next().is_none());
    assert!(!report.result.graph.internal_edges.contains_key("tests.test_users"));
    assert_eq!(report.result.statistics.total_dependencies, 15);
}

#[test]
fn test_extra_stdlib_names() {
    let temp_dir = tempdir().unwrap();
    let input = create_web_app(temp_dir.path()).unwrap();

    let analyzer = DependencyAnalyzer::with_config(AnalyzerConfig {
        extra_stdlib_modules: vec!["flask".to_string()],
        ..Default::default()
    });
    let report = analyze_file(&analyzer, &input).unwrap();

    assert_eq!(
        report.result.graph.stdlib_edges["webapp.app"],
        vec!["os".to_string(), "logging".to_string(), "flask".to_string()]
    );
    assert!(!report.result.graph.all_external_nodes.contains("flask"));
}

#[test]
fn test_ring_cycles_and_reports() {
    let temp_dir = tempdir().unwrap();
    let input = create_ring(temp_dir.path(), "ring.json", 4).unwrap();

    let report = analyze_file(&DependencyAnalyzer::new(), &input).unwrap();
    let result = &report.result;

    assert!(!result.graph.cycles.is_empty());
    for cycle in &result.graph.cycles {
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(result.graph.internal_edges[&pair[0]].contains(&pair[1]));
        }
    }
    assert_eq!(result.graph.cycle_groups().len(), 1);
    assert_eq!(result.warnings.len(), result.graph.cycles.len());

    let reports = vec![report.clone()];

    let text = TextFormatter::new(false, false, false).format(&reports).unwrap();
    assert!(text.contains("Circular Dependencies Detected"));
    assert!(text.contains("ring.m0 -> ring.m1 -> ring.m2 -> ring.m3 -> ring.m0"));

    let json = JsonFormatter::new(false).format(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["statistics"]["circular_dependency_count"], result.graph.cycles.len());

    let csv = CsvFormatter.format(&reports).unwrap();
    assert_eq!(csv.lines().count(), 1 + result.records.len());

    let dot = DotFormatter.format(&reports).unwrap();
    assert!(dot.contains("\"ring.m3\" -> \"ring.m0\""));
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = tempdir().unwrap();
    let inputs = vec![
        create_web_app(temp_dir.path()).unwrap(),
        create_ring(temp_dir.path(), "small.json", 3).unwrap(),
        create_ring(temp_dir.path(), "large.json", 50).unwrap(),
        temp_dir.path().join("missing.json"),
    ];

    let analyzer = DependencyAnalyzer::new();
    let sequential = analyze_inputs(&analyzer, inputs.clone(), false);
    let parallel = analyze_inputs(&analyzer, inputs.clone(), true);

    assert_eq!(sequential.len(), inputs.len());
    assert_eq!(parallel.len(), inputs.len());

    for ((seq_path, seq), (par_path, par)) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(seq_path, par_path);
        match (seq, par) {
            (Ok(seq), Ok(par)) => assert_eq!(seq.result, par.result),
            (Err(seq), Err(par)) => assert_eq!(seq.to_string(), par.to_string()),
            _ => panic!("sequential and parallel runs disagree for {}", seq_path.display()),
        }
    }

    assert!(parallel[3].1.as_ref().unwrap_err().is_critical());
}

#[test]
fn test_malformed_module_keeps_partial_result() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("broken.json");
    fs::write(&input, r#"[
        {"name": "good", "imports": ["import os", "import broken"]},
        {"name": "broken..name", "imports": ["import sys"]}
    ]"#).unwrap();

    let report = analyze_file(&DependencyAnalyzer::new(), &input).unwrap();
    assert!(report.result.has_errors());
    assert!(report.result.errors[0].starts_with("Dependency analysis failed"));
    assert_eq!(report.result.statistics.stdlib_dependencies, 1);

    let analyzer = DependencyAnalyzer::with_config(AnalyzerConfig {
        skip_invalid_modules: true,
        ..Default::default()
    });
    let report = analyze_file(&analyzer, &input).unwrap();
    assert!(!report.result.has_errors());
    assert!(report.result.warnings.iter().any(|w| w.starts_with("Skipped module")));
}
