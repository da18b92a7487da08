#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.doc-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doc-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// All three rules enabled, external probing off.
pub const ALL_RULES_CONFIG: &str = r#"
[rules]
require-section-license = "on"
section-order = { order = ["About", "Installation", "Usage", "License"] }
broken-link-check = "on"

[scanner]
gitignore = false
"#;

/// Only the license rule.
pub const LICENSE_ONLY_CONFIG: &str = r#"
[rules]
require-section-license = true
"#;

/// A README that passes every rule in `ALL_RULES_CONFIG`.
pub const CLEAN_README: &str = "\
# About
See [install](#installation) and the [guide](docs/guide.md).

## Installation
cargo install

## License
MIT
";
