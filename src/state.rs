//! State file path resolution with git-awareness.
//!
//! When the project root is a git repository, state files live in `.git/doc-guard/`
//! (never committed). Otherwise they fall back to `.doc-guard/`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::LOCAL_CONFIG_NAME;

const STATE_DIR_NAME: &str = "doc-guard";
const FALLBACK_STATE_DIR: &str = ".doc-guard";
const CACHE_FILENAME: &str = "cache.json";

/// Detect the state directory for the cache file.
///
/// Only `.git` in `project_root` itself is considered, not in parent directories.
#[must_use]
pub fn detect_state_dir(project_root: &Path) -> PathBuf {
    let git_dir = project_root.join(".git");
    if git_dir.is_dir() {
        git_dir.join(STATE_DIR_NAME)
    } else {
        project_root.join(FALLBACK_STATE_DIR)
    }
}

/// Get the cache file path for the given project root.
#[must_use]
pub fn cache_path(project_root: &Path) -> PathBuf {
    detect_state_dir(project_root).join(CACHE_FILENAME)
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Discover the project root by walking up from `start` looking for markers.
///
/// Markers, checked in order at each level: a `.git/` directory, then `.doc-guard.toml`.
/// Returns `start` (made absolute when possible) if no marker is found.
#[must_use]
pub fn discover_project_root(start: &Path) -> PathBuf {
    let abs_start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for ancestor in abs_start.ancestors() {
        if ancestor.join(".git").is_dir() || ancestor.join(LOCAL_CONFIG_NAME).is_file() {
            return ancestor.to_path_buf();
        }
    }

    abs_start
}

/// Write `data` to `path` through a temp file in the same directory and an atomic rename.
///
/// Creates missing parent directories. On failure the original file is left untouched.
///
/// # Errors
/// Returns an error if the temp file cannot be written or renamed into place.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;

    let mut tmp_name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
