use std::path::PathBuf;

use clap::Parser;

use super::*;

fn lint_args(argv: &[&str]) -> LintArgs {
    let mut full = vec!["doc-guard", "lint"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Commands::Lint(args) => args,
        Commands::Init(_) => panic!("Expected Lint command"),
    }
}

#[test]
fn cli_lint_default_path() {
    let args = lint_args(&[]);
    assert_eq!(args.paths, vec![PathBuf::from(".")]);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.jobs.is_none());
    assert!(!args.no_cache);
    assert!(!args.check_external);
}

#[test]
fn cli_lint_with_paths() {
    let args = lint_args(&["README.md", "docs"]);
    assert_eq!(args.paths, vec![PathBuf::from("README.md"), PathBuf::from("docs")]);
}

#[test]
fn cli_lint_with_options() {
    let args = lint_args(&[
        "--config",
        "custom.toml",
        "-f",
        "json",
        "-o",
        "report.json",
        "-j",
        "4",
        "--check-external",
    ]);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
    assert_eq!(args.jobs, Some(4));
    assert!(args.check_external);
}

#[test]
fn cli_lint_cache_flags_conflict() {
    let result = Cli::try_parse_from(["doc-guard", "lint", "--no-cache", "--cache", "c.json"]);
    assert!(result.is_err());
}

#[test]
fn cli_lint_rejects_unknown_format() {
    let result = Cli::try_parse_from(["doc-guard", "lint", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["doc-guard", "-vv", "--quiet", "--color", "never", "--no-config", "lint"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["doc-guard", "lint", "-v", "--no-config"]);
    assert_eq!(cli.verbose, 1);
    assert!(cli.no_config);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["doc-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".doc-guard.toml"));
            assert!(!args.force);
        }
        Commands::Lint(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_output_and_force() {
    let cli = Cli::parse_from(["doc-guard", "init", "-o", "cfg/doc.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("cfg/doc.toml"));
            assert!(args.force);
        }
        Commands::Lint(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["doc-guard"]).is_err());
}
