use std::fs;
use std::path::PathBuf;
use clap::Parser;
use tempfile::tempdir;
use modgraph::{
    cli::{args::OutputFormat as CliOutputFormat, Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::OutputFormat,
};

const MODULES: &str = r#"[
    {"name": "app.main", "path": "app/main.py", "imports": ["import os", "from .util import helper", "import attrs"]},
    {"name": "app.util", "path": "app/util.py", "imports": ["from app.main import run"]}
]"#;

#[test]
fn test_cli_args_parsing() {
    // Test default values
    let args = Args::parse_from(["modgraph"]);
    assert!(args.inputs.is_empty());
    assert!(args.output.is_none());
    assert!(args.exclude.is_empty());
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.init);

    // Test with arguments
    let args = Args::parse_from([
        "modgraph",
        "one.json",
        "two.json",
        "--output", "csv",
        "--output-file", "deps.csv",
        "--exclude", "tests.*",
        "--exclude", "docs.*",
        "--stdlib", "six",
        "--skip-invalid",
        "--external-limit", "3",
        "--no-parallel",
        "--quiet",
    ]);
    assert_eq!(args.inputs, vec![PathBuf::from("one.json"), PathBuf::from("two.json")]);
    assert!(matches!(args.output, Some(CliOutputFormat::Csv)));
    assert_eq!(args.output_file, Some(PathBuf::from("deps.csv")));
    assert_eq!(args.exclude, vec!["tests.*", "docs.*"]);
    assert_eq!(args.stdlib, vec!["six"]);
    assert!(args.skip_invalid);
    assert_eq!(args.external_limit, Some(3));
    assert!(args.no_parallel);
    assert!(args.quiet);
}

#[test]
fn test_cli_rejects_unknown_format() {
    assert!(Args::try_parse_from(["modgraph", "a.json", "--output", "yaml"]).is_err());
}

#[test]
fn test_config_file_and_cli_precedence() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("modules.json");
    fs::write(&input, MODULES).unwrap();

    let config = temp_dir.path().join("modgraph.toml");
    fs::write(&config, format!(
        "inputs = [{:?}]\noutput_format = \"dot\"\nshow_external_limit = 4\nexclude_patterns = [\"tests.*\"]\n",
        input.display().to_string()
    )).unwrap();

    let from_file = load_config_with_env_prefix(
        CliArgs {
            config: Some(config.clone()),
            ..Default::default()
        },
        "MGCLITEST",
    )
    .unwrap();
    assert_eq!(from_file.inputs, vec![input.clone()]);
    assert_eq!(from_file.output_format, OutputFormat::Dot);
    assert_eq!(from_file.show_external_limit, 4);
    assert_eq!(from_file.analyzer.exclude_patterns, vec!["tests.*".to_string()]);

    let args = Args::parse_from([
        "modgraph",
        "--config",
        config.to_str().unwrap(),
        "--output",
        "json",
        "--no-colors",
    ]);
    let overridden = load_config_with_env_prefix(CliArgs::from(&args), "MGCLITEST").unwrap();
    assert_eq!(overridden.output_format, OutputFormat::Json);
    assert!(!overridden.use_colors);
    assert_eq!(overridden.inputs, vec![input]);
}

#[test]
fn test_command_writes_report() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("modules.json");
    fs::write(&input, MODULES).unwrap();
    let config = temp_dir.path().join("modgraph.toml");
    fs::write(&config, "").unwrap();
    let output = temp_dir.path().join("report.json");

    let args = Args::parse_from([
        "modgraph",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        output.to_str().unwrap(),
        "--quiet",
    ]);
    assert_eq!(Command::from_args(args).run(), 0);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["module_count"], 2);
    assert_eq!(value["result"]["statistics"]["total_dependencies"], 4);
    assert_eq!(value["result"]["graph"]["internal_edges"]["app.main"][0], "app.util");
    assert_eq!(value["result"]["graph"]["cycles"][0][0], "app.main");
}

#[test]
fn test_command_exit_codes() {
    let temp_dir = tempdir().unwrap();
    let config = temp_dir.path().join("modgraph.toml");
    fs::write(&config, "").unwrap();
    let output = temp_dir.path().join("report.txt");

    let missing = temp_dir.path().join("missing.json");
    let args = Args::parse_from([
        "modgraph",
        missing.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--quiet",
    ]);
    assert_eq!(Command::from_args(args).run(), 2);

    let invalid = temp_dir.path().join("invalid.json");
    fs::write(&invalid, r#"[{"name": "", "imports": ["import os"]}]"#).unwrap();
    let args = Args::parse_from([
        "modgraph",
        invalid.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output-file",
        output.to_str().unwrap(),
        "--quiet",
    ]);
    assert_eq!(Command::from_args(args).run(), 1);

    let args = Args::parse_from([
        "modgraph",
        invalid.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output-file",
        output.to_str().unwrap(),
        "--skip-invalid",
        "--quiet",
    ]);
    assert_eq!(Command::from_args(args).run(), 0);
}
