use serde::Serialize;

use crate::error::Result;
use crate::rules::Violation;
use crate::runner::BatchReport;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    files_with_issues: usize,
    issues: usize,
    cache_hits: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    violations: Vec<&'a Violation>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let results: Vec<FileResult<'_>> = report
            .sorted_results()
            .into_iter()
            .map(|r| {
                let mut violations: Vec<&Violation> = r.violations.iter().collect();
                violations.sort_by_key(|v| v.line_number);
                FileResult {
                    path: r.path.to_string_lossy().replace('\\', "/"),
                    violations,
                }
            })
            .collect();

        let output = JsonOutput {
            summary: Summary {
                files: report.results.len(),
                files_with_issues: report.results.iter().filter(|r| !r.is_clean()).count(),
                issues: report.total_violations(),
                cache_hits: report.stats.cache_hits,
            },
            results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
