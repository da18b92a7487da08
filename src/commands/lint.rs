use std::path::Path;

use crate::cli::{Cli, LintArgs};
use crate::output::{ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::rules::RuleSetBuilder;
use crate::runner::{BatchReport, LintRunner, Orchestrator};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, scanner, state};

use super::context::{
    color_choice_to_mode, load_config, open_cache_store, resolve_cache_path, write_output,
};

#[must_use]
pub fn run_lint(args: &LintArgs, cli: &Cli) -> i32 {
    match run_lint_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lint the requested paths and print the report.
///
/// Returns the process exit code. A cache that could not be saved yields
/// `EXIT_CONFIG_ERROR`, but only after the report has been written.
///
/// # Errors
/// Returns an error for invalid configuration, an unusable worker pool, or an
/// unwritable output file.
pub fn run_lint_impl(args: &LintArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let builder = RuleSetBuilder::new().with_check_external(args.check_external);
    let settings = builder.effective_settings(&config.rules);
    let rules = builder.build(&settings)?;
    if rules.is_empty() {
        log::info!("No rules enabled; every file will pass");
    }
    log::debug!(
        "Enabled rules: {}",
        rules.iter().map(|r| r.id()).collect::<Vec<_>>().join(", ")
    );

    let files = scanner::collect_files(&args.paths, &config.scanner)?;
    if files.is_empty() && !cli.quiet {
        ErrorOutput::new(color_choice_to_mode(cli.color))
            .print_warning("No Markdown files found to lint");
    }

    let project_root = state::discover_project_root(Path::new("."));
    let cache_path = resolve_cache_path(args.no_cache, args.cache.as_deref(), &project_root);
    let mut store = open_cache_store(cache_path, &settings);

    let orchestrator = Orchestrator::new(LintRunner::new(rules))
        .with_jobs(args.jobs)
        .with_progress(!cli.quiet);
    let report = orchestrator.run(&files, &mut store)?;

    let output = format_report(&report, args.format, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if let Some(e) = &report.persist_error {
        ErrorOutput::new(color_choice_to_mode(cli.color)).print(e);
        return Ok(EXIT_CONFIG_ERROR);
    }

    Ok(exit_code_for(&report))
}

fn format_report(report: &BatchReport, format: OutputFormat, cli: &Cli) -> crate::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[must_use]
pub fn exit_code_for(report: &BatchReport) -> i32 {
    if report.has_violations() {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
