use std::path::PathBuf;
use std::sync::mpsc;

use rayon::ThreadPoolBuilder;

use super::{FileReport, LintRunner, cache_key};
use crate::cache::CacheStore;
use crate::output::ScanProgress;
use crate::{DocGuardError, Result};

/// Counters for a single batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub cache_hits: usize,
    /// Files parsed and evaluated in this run.
    pub evaluated: usize,
    /// Files that produced a `runner` violation.
    pub failures: usize,
}

#[derive(Debug)]
pub struct BatchReport {
    /// Per-file results, in completion order.
    pub results: Vec<FileReport>,
    pub stats: RunStats,
    /// Set when the results were computed but the cache could not be saved.
    pub persist_error: Option<DocGuardError>,
}

impl BatchReport {
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.results.iter().any(|r| !r.is_clean())
    }

    /// Results ordered by path, for deterministic reporting.
    #[must_use]
    pub fn sorted_results(&self) -> Vec<&FileReport> {
        let mut sorted: Vec<_> = self.results.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));
        sorted
    }
}

/// Fans [`LintRunner::run_one`] out over a bounded thread pool.
pub struct Orchestrator {
    runner: LintRunner,
    jobs: Option<usize>,
    show_progress: bool,
}

impl Orchestrator {
    #[must_use]
    pub const fn new(runner: LintRunner) -> Self {
        Self {
            runner,
            jobs: None,
            show_progress: false,
        }
    }

    /// Worker count. `None` or `Some(0)` uses the available hardware concurrency.
    #[must_use]
    pub const fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub const fn runner(&self) -> &LintRunner {
        &self.runner
    }

    /// Lint every file, then fold fresh results into `store` and persist it once.
    ///
    /// Workers only read the cache; it is updated on the calling thread after all
    /// of them have finished.
    ///
    /// # Errors
    /// Returns `ThreadPool` if the worker pool cannot be created. A failure to
    /// persist the cache is reported in [`BatchReport::persist_error`] instead.
    pub fn run(&self, files: &[PathBuf], store: &mut CacheStore) -> Result<BatchReport> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.jobs.unwrap_or(0))
            .thread_name(|i| format!("doc-guard-worker-{i}"))
            .build()
            .map_err(|e| DocGuardError::ThreadPool(e.to_string()))?;

        let progress = ScanProgress::new(files.len() as u64, !self.show_progress);
        let (tx, rx) = mpsc::channel::<FileReport>();
        let cache = store.cache();
        let runner = &self.runner;

        pool.scope(|scope| {
            for path in files {
                let tx = tx.clone();
                let progress = &progress;
                scope.spawn(move |_| {
                    let report = runner.run_one(path, cache);
                    progress.inc();
                    // The receiver outlives the scope, so this cannot fail.
                    let _ = tx.send(report);
                });
            }
        });
        drop(tx);
        progress.finish();

        let results: Vec<FileReport> = rx.into_iter().collect();

        let mut stats = RunStats {
            files: results.len(),
            ..RunStats::default()
        };
        for report in &results {
            if report.from_cache {
                stats.cache_hits += 1;
                continue;
            }
            match &report.fingerprint {
                Some(fingerprint) => {
                    stats.evaluated += 1;
                    store.cache_mut().set(
                        &cache_key(&report.path),
                        fingerprint.clone(),
                        report.violations.clone(),
                    );
                }
                None => stats.failures += 1,
            }
        }

        log::info!(
            "Linted {} file(s): {} from cache, {} evaluated, {} failed",
            stats.files,
            stats.cache_hits,
            stats.evaluated,
            stats.failures
        );

        let persist_error = store.persist().err();
        if let Some(e) = &persist_error {
            log::warn!("Failed to save cache: {e}");
        }

        Ok(BatchReport {
            results,
            stats,
            persist_error,
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
