//! Markdown file discovery.

mod filter;

pub use filter::{FileFilter, MarkdownFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive directory walker.
///
/// Filters see paths relative to the scan root, so exclude globs such as
/// `vendor/**` match regardless of where the root lives.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.matches(relative)
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.accepts(root, e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .filter_entry(|e| e.file_name() != ".git")
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.accepts(root, e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        files.sort();
        Ok(files)
    }
}

/// Expand CLI paths into the list of files to lint.
///
/// Directories are walked; anything else (an explicit file, or a path that does not
/// exist) is kept as given so a missing path is reported rather than dropped.
/// Duplicates are removed, preserving first occurrence.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid or a directory cannot be read.
pub fn collect_files(paths: &[PathBuf], config: &ScannerConfig) -> Result<Vec<PathBuf>> {
    let filter = MarkdownFilter::from_config(config)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.gitignore);

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scanner.scan(path)?;
            log::debug!("Found {} file(s) under {}", found.len(), path.display());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    let mut seen = std::collections::HashSet::new();
    files.retain(|f| seen.insert(f.clone()));
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
