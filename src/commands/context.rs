//! Helpers shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::CacheStore;
use crate::cli::ColorChoice;
use indexmap::IndexMap;

use crate::config::{Config, ConfigLoader, FileConfigLoader, RuleSetting, compute_rules_hash};
use crate::output::ColorMode;
use crate::state;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration: an explicit path, `--no-config` defaults, or discovery.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Where the cache for this run lives, or `None` when caching is disabled.
#[must_use]
pub fn resolve_cache_path(
    no_cache: bool,
    explicit: Option<&Path>,
    project_root: &Path,
) -> Option<PathBuf> {
    if no_cache {
        return None;
    }
    Some(explicit.map_or_else(|| state::cache_path(project_root), Path::to_path_buf))
}

/// Open the cache store keyed on the rule settings in effect for this run.
#[must_use]
pub fn open_cache_store(
    cache_path: Option<PathBuf>,
    rules: &IndexMap<String, RuleSetting>,
) -> CacheStore {
    let config_hash = compute_rules_hash(rules);
    match cache_path {
        Some(path) => CacheStore::open(path, &config_hash),
        None => CacheStore::in_memory(config_hash),
    }
}

/// Write output to a file or stdout.
///
/// `quiet` only affects stdout: file writes always happen.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        state::ensure_parent_dir(path)?;
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
