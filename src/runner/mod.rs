//! Per-file evaluation and the parallel batch driver.

mod orchestrator;

pub use orchestrator::{BatchReport, Orchestrator, RunStats};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cache::{Cache, read_file_with_hash};
use crate::document::{Document, MarkdownParser};
use crate::rules::{Rule, Violation};
use crate::{DocGuardError, Result};

/// Outcome of linting a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Content fingerprint. Absent when the file could not be evaluated, so the
    /// result is never cached.
    #[serde(skip)]
    pub fingerprint: Option<String>,
    pub violations: Vec<Violation>,
    #[serde(skip)]
    pub from_cache: bool,
}

impl FileReport {
    /// Report for a file that could not be linted.
    fn failed(path: &Path, error: &DocGuardError) -> Self {
        let message = match error {
            DocGuardError::NotFound { .. } => error.to_string(),
            other => format!("An unexpected error occurred: {other}"),
        };
        log::debug!("Lint failed for {}: {error}", path.display());
        Self {
            path: path.to_path_buf(),
            fingerprint: None,
            violations: vec![Violation::runner(message)],
            from_cache: false,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// True if the file itself could not be linted.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.violations.iter().any(Violation::is_runner_failure)
    }
}

/// Cache key for a path: forward slashes on every platform.
#[must_use]
pub fn cache_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lints one file at a time against a fixed, ordered rule list.
pub struct LintRunner {
    parser: MarkdownParser,
    rules: Vec<Box<dyn Rule>>,
}

impl LintRunner {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            parser: MarkdownParser::new(),
            rules,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Lint `path`, reusing the cached violations when its fingerprint is unchanged.
    ///
    /// Never fails: a missing or unreadable file, or a failing rule, becomes a single
    /// `runner` violation with no fingerprint.
    #[must_use]
    pub fn run_one(&self, path: &Path, cache: &Cache) -> FileReport {
        let (fingerprint, bytes) = match read_file_with_hash(path) {
            Ok(read) => read,
            Err(e) => return FileReport::failed(path, &e),
        };

        let key = cache_key(path);
        if let Some(entry) = cache.get_if_valid(&key, &fingerprint) {
            log::debug!("Cache hit: {key}");
            return FileReport {
                path: path.to_path_buf(),
                fingerprint: Some(fingerprint),
                violations: entry.violations.clone(),
                from_cache: true,
            };
        }

        log::debug!("Cache miss: {key}");
        match self.evaluate(path, &bytes) {
            Ok(violations) => FileReport {
                path: path.to_path_buf(),
                fingerprint: Some(fingerprint),
                violations,
                from_cache: false,
            },
            Err(e) => FileReport::failed(path, &e),
        }
    }

    /// Parse the already-read content of `path` and apply every rule, bypassing the cache.
    ///
    /// # Errors
    /// Returns the first decode or rule failure.
    pub fn evaluate(&self, path: &Path, bytes: &[u8]) -> Result<Vec<Violation>> {
        let doc = self.parser.parse_bytes(path, bytes)?;
        self.apply_rules(&doc)
    }

    /// Apply every rule in order and concatenate their violations.
    ///
    /// A rule that returns an error or panics aborts evaluation of this document.
    ///
    /// # Errors
    /// Returns `RuleEvaluation` naming the failing rule.
    pub fn apply_rules(&self, doc: &Document) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            match panic::catch_unwind(AssertUnwindSafe(|| rule.apply(doc))) {
                Ok(Ok(found)) => violations.extend(found),
                Ok(Err(e @ DocGuardError::RuleEvaluation { .. })) => return Err(e),
                Ok(Err(e)) => {
                    return Err(DocGuardError::RuleEvaluation {
                        rule: rule.id().to_string(),
                        message: e.to_string(),
                    });
                }
                Err(payload) => {
                    return Err(DocGuardError::RuleEvaluation {
                        rule: rule.id().to_string(),
                        message: panic_message(payload.as_ref()),
                    });
                }
            }
        }
        Ok(violations)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
