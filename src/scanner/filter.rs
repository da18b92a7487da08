use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{DocGuardError, Result};

/// Decides whether a discovered path is linted.
pub trait FileFilter {
    fn matches(&self, path: &Path) -> bool;
}

/// Extension allow-list plus exclude globs from `[scanner]`.
///
/// Extensions compare case-insensitively. An empty list admits every file.
pub struct MarkdownFilter {
    extensions: HashSet<String>,
    exclude: GlobSet,
}

impl MarkdownFilter {
    /// # Errors
    /// Returns `InvalidPattern` for the first exclude glob that does not compile.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(&config.extensions, &config.exclude)
    }

    /// # Errors
    /// Returns `InvalidPattern` for the first exclude glob that does not compile.
    pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
        let invalid = |pattern: &str, source| DocGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        let mut set = GlobSetBuilder::new();
        for pattern in exclude {
            set.add(Glob::new(pattern).map_err(|e| invalid(pattern, e))?);
        }

        Ok(Self {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            exclude: set.build().map_err(|e| invalid(&exclude.join(", "), e))?,
        })
    }

    fn extension_allowed(&self, path: &Path) -> bool {
        self.extensions.is_empty()
            || path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.extensions.contains(&ext.to_ascii_lowercase()))
    }
}

impl FileFilter for MarkdownFilter {
    fn matches(&self, path: &Path) -> bool {
        self.extension_allowed(path) && !self.exclude.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
