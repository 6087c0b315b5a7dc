//! Parallel analysis of several module lists

use super::analyzer::DependencyAnalyzer;
use crate::error::Result;
use crate::models::analysis::AnalysisReport;
use crate::parsers::module_list::ModuleListParser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Execute a function in parallel on a collection of items
pub fn parallel_process<T, F, R>(items: Vec<T>, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    items.into_par_iter().map(f).collect()
}

/// Load one module list file and analyse it
pub fn analyze_file(analyzer: &DependencyAnalyzer, input: &Path) -> Result<AnalysisReport> {
    let modules = ModuleListParser::parse_file(input)?;
    debug!(input = %input.display(), modules = modules.len(), "module list loaded");

    let result = analyzer.analyze(&modules);
    Ok(AnalysisReport::new(input, modules.len(), result))
}

/// Analyse every input, keeping the input order in the returned list
///
/// A file that cannot be loaded yields an `Err` in its slot and does not
/// stop the remaining inputs.
pub fn analyze_inputs(
    analyzer: &DependencyAnalyzer,
    inputs: Vec<PathBuf>,
    parallel: bool,
) -> Vec<(PathBuf, Result<AnalysisReport>)> {
    info!(inputs = inputs.len(), parallel, "analysing module lists");

    let run = |input: PathBuf| {
        let report = analyze_file(analyzer, &input);
        (input, report)
    };

    if parallel && inputs.len() > 1 {
        parallel_process(inputs, run)
    } else {
        inputs.into_iter().map(run).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModgraphError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parallel_process_keeps_order() {
        let doubled = parallel_process((0..100).collect(), |n: i32| n * 2);
        assert_eq!(doubled, (0..100).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_analyze_inputs_reports_each_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        fs::write(
            &good,
            r#"[{"name": "a", "path": "a.py", "imports": ["import b"]}, {"name": "b", "path": "b.py", "imports": []}]"#,
        )
        .unwrap();
        let missing = temp_dir.path().join("missing.json");

        let analyzer = DependencyAnalyzer::new();
        let results = analyze_inputs(&analyzer, vec![good.clone(), missing.clone()], true);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, good);
        let report = results[0].1.as_ref().unwrap();
        assert_eq!(report.module_count, 2);
        assert_eq!(report.result.graph.internal_edges["a"], vec!["b".to_string()]);

        assert_eq!(results[1].0, missing);
        assert!(matches!(results[1].1, Err(ModgraphError::InputNotFound { .. })));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let temp_dir = TempDir::new().unwrap();
        let inputs: Vec<PathBuf> = (0..4)
            .map(|i| {
                let path = temp_dir.path().join(format!("list{}.json", i));
                fs::write(&path, format!(r#"[{{"name": "m{}", "imports": ["import os"]}}]"#, i)).unwrap();
                path
            })
            .collect();

        let analyzer = DependencyAnalyzer::new();
        let parallel = analyze_inputs(&analyzer, inputs.clone(), true);
        let sequential = analyze_inputs(&analyzer, inputs, false);

        for ((p_path, p), (s_path, s)) in parallel.iter().zip(&sequential) {
            assert_eq!(p_path, s_path);
            assert_eq!(p.as_ref().unwrap().result, s.as_ref().unwrap().result);
        }
    }
}
