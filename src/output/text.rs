use std::fmt::Write;

use crate::error::Result;
use crate::rules::Violation;
use crate::runner::{BatchReport, FileReport};

use super::{ColorMode, OutputFormatter, ansi};

/// Human-readable report grouped by file.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.for_stdout(),
            verbose,
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool, verbose: u8) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_file(&self, report: &FileReport, output: &mut String) {
        let header = format!(
            "✗ Found {} issue(s) in {}:",
            report.violations.len(),
            report.path.display()
        );
        writeln!(output, "{}", self.paint(ansi::RED, &header)).ok();

        let mut violations: Vec<&Violation> = report.violations.iter().collect();
        violations.sort_by_key(|v| v.line_number);
        for v in violations {
            let rule = self.paint(ansi::CYAN, &format!("({})", v.rule_id));
            writeln!(output, "  - L{} {rule} {}", v.line_number, v.message).ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::new();
        let with_issues: Vec<&FileReport> = report
            .sorted_results()
            .into_iter()
            .filter(|r| !r.is_clean())
            .collect();

        for file in &with_issues {
            self.format_file(file, &mut output);
            output.push('\n');
        }

        let files = report.results.len();
        if with_issues.is_empty() {
            let line = format!("✓ No issues found in {files} file(s).");
            writeln!(output, "{}", self.paint(ansi::GREEN, &line)).ok();
        } else {
            let line = format!(
                "Found {} issue(s) in {} of {files} file(s).",
                report.total_violations(),
                with_issues.len()
            );
            writeln!(output, "{}", self.paint(ansi::YELLOW, &line)).ok();
        }

        if self.verbose > 0 {
            let stats = &report.stats;
            writeln!(
                output,
                "{}",
                self.paint(
                    ansi::DIM,
                    &format!(
                        "{} from cache, {} evaluated, {} failed",
                        stats.cache_hits, stats.evaluated, stats.failures
                    )
                )
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
