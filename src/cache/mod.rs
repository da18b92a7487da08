//! Content-addressed cache of lint results.
//!
//! A file's violations are reused only when its SHA-256 fingerprint and the
//! rules configuration are unchanged since they were recorded.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::rules::Violation;
use crate::state::atomic_write;
use crate::{DocGuardError, Result};

const CACHE_VERSION: u32 = 1;

/// Cached lint result for a single file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub hash: String,
    pub violations: Vec<Violation>,
}

/// Per-file violations keyed by normalized path.
///
/// On disk:
/// ```json
/// {
///   "version": 1,
///   "config_hash": "abc123...",
///   "files": {
///     "docs/README.md": { "hash": "def456...", "violations": [...] }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cache {
    version: u32,
    config_hash: String,
    files: HashMap<String, CacheEntry>,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Cache {
    #[must_use]
    pub fn new(config_hash: String) -> Self {
        Self {
            version: CACHE_VERSION,
            config_hash,
            files: HashMap::new(),
        }
    }

    /// # Errors
    /// `NotFound` when there is no cache file yet, otherwise a read or JSON error.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| DocGuardError::from_io(path, e))?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize as pretty JSON. The file is written to a sibling temp file and renamed into place, so an
    /// interrupted save leaves the previous cache intact.
    ///
    /// # Errors
    /// Returns `FileRead` (carrying the I/O cause) if the write or rename fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, json.as_bytes()).map_err(|e| DocGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Entries are usable only under the same format version and rules hash.
    #[must_use]
    pub fn is_valid(&self, config_hash: &str) -> bool {
        self.version == CACHE_VERSION && self.config_hash == config_hash
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&CacheEntry> {
        self.files.get(path)
    }

    /// Entry for `path`, but only if it was recorded for content `file_hash`.
    #[must_use]
    pub fn get_if_valid(&self, path: &str, file_hash: &str) -> Option<&CacheEntry> {
        self.get(path).filter(|entry| entry.hash == file_hash)
    }

    /// Record (or overwrite) the violations found for `path` at `hash`.
    pub fn set(&mut self, path: &str, hash: String, violations: Vec<Violation>) {
        self.files
            .insert(path.to_string(), CacheEntry { hash, violations });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}

/// A [`Cache`] together with where it lives on disk.
///
/// A store without a path is in-memory only: [`CacheStore::persist`] is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    cache: Cache,
    path: Option<PathBuf>,
}

impl CacheStore {
    /// In-memory store that is never written to disk.
    #[must_use]
    pub fn in_memory(config_hash: String) -> Self {
        Self {
            cache: Cache::new(config_hash),
            path: None,
        }
    }

    /// Open the cache at `path`, starting empty if it is missing, unreadable,
    /// or was recorded with a different rules configuration.
    #[must_use]
    pub fn open(path: PathBuf, config_hash: &str) -> Self {
        let cache = match Cache::load(&path) {
            Ok(cache) if cache.is_valid(config_hash) => {
                log::debug!("Loaded {} cache entries from {}", cache.len(), path.display());
                cache
            }
            Ok(_) => {
                log::info!("Rules configuration changed, discarding {}", path.display());
                Cache::new(config_hash.to_string())
            }
            Err(DocGuardError::NotFound { .. }) => Cache::new(config_hash.to_string()),
            Err(e) => {
                log::warn!("Ignoring unreadable cache {}: {e}", path.display());
                Cache::new(config_hash.to_string())
            }
        };
        Self {
            cache,
            path: Some(path),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    pub const fn cache_mut(&mut self) -> &mut Cache {
        &mut self.cache
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the cache to its backing file, if it has one.
    ///
    /// # Errors
    /// Returns an error if the cache cannot be serialized or written.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.cache.save(path)?;
        log::debug!("Saved {} cache entries to {}", self.cache.len(), path.display());
        Ok(())
    }
}

/// Read a whole file, hashing it in 8 KiB chunks as it streams in.
///
/// Returns the SHA-256 hex digest together with exactly the bytes that were hashed,
/// so a caller parses the same content its fingerprint describes.
///
/// # Errors
/// Returns `NotFound` if the file does not exist, `FileRead` otherwise.
pub fn read_file_with_hash(path: &Path) -> Result<(String, Vec<u8>)> {
    let mut file = fs::File::open(path).map_err(|e| DocGuardError::from_io(path, e))?;
    let mut hasher = Sha256::new();
    let mut content = Vec::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = file
            .read(&mut buffer)
            .map_err(|e| DocGuardError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        content.extend_from_slice(&buffer[..n]);
    }
    Ok((format!("{:x}", hasher.finalize()), content))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
