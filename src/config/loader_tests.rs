use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::config::RuleSetting;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/doc-guard")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn load_returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
    assert!(config.rules.is_empty());
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.doc-guard.toml", "[rules]\nsection-order = 'on'\n")
        .with_file(
            "/home/user/.config/doc-guard/config.toml",
            "[rules]\nbroken-link-check = true\n",
        );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(config.rules.contains_key("section-order"));
    assert!(!config.rules.contains_key("broken-link-check"));
}

#[test]
fn load_walks_up_to_ancestor_config() {
    let fs = MockFileSystem::new()
        .with_current_dir("/project/docs/guides")
        .with_file(
            "/project/.doc-guard.toml",
            "[rules]\nrequire-section-license = 'on'\n",
        );
    let loader = FileConfigLoader::with_fs(fs);

    assert_eq!(
        loader.discover(),
        Some(PathBuf::from("/project/.doc-guard.toml"))
    );
    let config = loader.load().unwrap();
    assert_eq!(
        config.rules.get("require-section-license"),
        Some(&RuleSetting::Switch("on".to_string()))
    );
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/doc-guard/config.toml",
        "[rules]\nbroken-link-check = true\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(
        config.rules.get("broken-link-check"),
        Some(&RuleSetting::Toggle(true))
    );
}

#[test]
fn load_from_path_missing_file_is_not_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/nowhere/custom.toml"))
        .unwrap_err();
    assert!(matches!(err, DocGuardError::NotFound { .. }));
}

#[test]
fn load_from_path_reports_syntax_errors() {
    let fs = MockFileSystem::new().with_file("/project/bad.toml", "[rules\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/bad.toml"))
        .unwrap_err();
    assert!(matches!(err, DocGuardError::TomlParse(_)));
}

#[test]
fn rule_order_follows_document_order() {
    let content = r#"
[rules]
section-order = { order = ["About"] }
broken-link-check = "on"
require-section-license = true
"#;
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", content);
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    let names: Vec<&str> = config.rules.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["section-order", "broken-link-check", "require-section-license"]
    );
}
