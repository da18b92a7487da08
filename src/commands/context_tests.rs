use std::fs;

use tempfile::TempDir;

use super::*;
use crate::DocGuardError;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_returns_defaults_even_with_path() {
    let config = load_config(Some(Path::new("does-not-exist.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[rules]\nsection-order = { order = ['About'] }\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert!(config.rules.contains_key("section-order"));
}

#[test]
fn missing_explicit_config_is_error() {
    let temp = TempDir::new().unwrap();
    let result = load_config(Some(&temp.path().join("missing.toml")), false);
    assert!(matches!(result, Err(DocGuardError::NotFound { .. })));
}

#[test]
fn cache_path_resolution() {
    let temp = TempDir::new().unwrap();
    assert!(resolve_cache_path(true, None, temp.path()).is_none());
    assert_eq!(
        resolve_cache_path(false, Some(Path::new("c.json")), temp.path()),
        Some(PathBuf::from("c.json"))
    );
    assert_eq!(
        resolve_cache_path(false, None, temp.path()),
        Some(temp.path().join(".doc-guard").join("cache.json"))
    );
}

#[test]
fn open_cache_store_without_path_is_in_memory() {
    let store = open_cache_store(None, &Config::default().rules);
    assert!(store.path().is_none());
    assert_eq!(store.cache().config_hash(), compute_rules_hash(&Config::default().rules));
}

#[test]
fn write_output_to_file_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out").join("report.txt");
    write_output(Some(&path), "content", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "content");
}
