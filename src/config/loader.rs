use std::path::{Path, PathBuf};

use crate::error::{DocGuardError, Result};

use super::Config;

/// Source of the active [`Config`].
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load an explicit `--config` file.
    ///
    /// # Errors
    /// `NotFound` if `path` does not exist, `TomlParse` for malformed TOML.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".doc-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Filesystem access used during config discovery.
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Starting point of the `.doc-guard.toml` walk-up.
    ///
    /// # Errors
    /// Fails if the working directory is gone or inaccessible.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for doc-guard.
    ///
    /// - Windows: `%APPDATA%\doc-guard`
    /// - macOS: `~/Library/Application Support/doc-guard`
    /// - Linux: `~/.config/doc-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// `std::fs` backed [`FileSystem`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "doc-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Discovers and parses `.doc-guard.toml`.
///
/// Search order:
/// 1. `.doc-guard.toml` in the current directory, then each ancestor directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if nothing is found
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Nearest `.doc-guard.toml` walking up from the current directory.
    fn local_config_path(&self) -> Option<PathBuf> {
        let cwd = self.fs.current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
            .find(|candidate| self.fs.exists(candidate))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path))
    }

    /// Path of the config file `load()` would use, if any.
    #[must_use]
    pub fn discover(&self) -> Option<PathBuf> {
        self.local_config_path().or_else(|| self.user_config_path())
    }

    fn parse_config(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(DocGuardError::from)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.discover() {
            Some(path) => {
                log::debug!("Using configuration file {}", path.display());
                self.load_from_path(&path)
            }
            None => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| DocGuardError::from_io(path, source))?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
