use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn matches(&self, _path: &Path) -> bool {
        true
    }
}

fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("docs/nested")).unwrap();
    fs::create_dir_all(root.join("vendor")).unwrap();
    fs::write(root.join("README.md"), "# Readme").unwrap();
    fs::write(root.join("docs/guide.md"), "# Guide").unwrap();
    fs::write(root.join("docs/nested/deep.markdown"), "# Deep").unwrap();
    fs::write(root.join("docs/notes.txt"), "plain").unwrap();
    fs::write(root.join("vendor/third.md"), "# Third").unwrap();
    temp_dir
}

fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scanner_finds_files_recursively() {
    let temp_dir = setup();
    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 5);
}

#[test]
fn collect_files_filters_by_extension_and_exclude() {
    let temp_dir = setup();
    let config = ScannerConfig {
        exclude: vec!["vendor/**".to_string()],
        ..ScannerConfig::default()
    };
    let files = collect_files(&[temp_dir.path().to_path_buf()], &config).unwrap();

    assert_eq!(
        names(&files, temp_dir.path()),
        vec!["README.md", "docs/guide.md", "docs/nested/deep.markdown"]
    );
}

#[test]
fn collect_files_respects_gitignore() {
    let temp_dir = setup();
    fs::write(temp_dir.path().join(".gitignore"), "vendor/\n").unwrap();

    let files = collect_files(&[temp_dir.path().to_path_buf()], &ScannerConfig::default()).unwrap();
    assert!(!names(&files, temp_dir.path()).contains(&"vendor/third.md".to_string()));

    let config = ScannerConfig {
        gitignore: false,
        ..ScannerConfig::default()
    };
    let files = collect_files(&[temp_dir.path().to_path_buf()], &config).unwrap();
    assert!(names(&files, temp_dir.path()).contains(&"vendor/third.md".to_string()));
}

#[test]
fn explicit_files_and_missing_paths_pass_through() {
    let temp_dir = setup();
    let explicit = temp_dir.path().join("docs/notes.txt");
    let missing = temp_dir.path().join("missing.md");

    let files = collect_files(&[explicit.clone(), missing.clone()], &ScannerConfig::default()).unwrap();
    assert_eq!(files, vec![explicit, missing]);
}

#[test]
fn duplicates_are_removed() {
    let temp_dir = setup();
    let readme = temp_dir.path().join("README.md");
    let files = collect_files(
        &[readme.clone(), temp_dir.path().to_path_buf()],
        &ScannerConfig::default(),
    )
    .unwrap();

    assert_eq!(files.iter().filter(|f| **f == readme).count(), 1);
    assert_eq!(files[0], readme);
}

#[test]
fn invalid_exclude_pattern_is_error() {
    let config = ScannerConfig {
        exclude: vec!["[bad".to_string()],
        ..ScannerConfig::default()
    };
    assert!(collect_files(&[PathBuf::from(".")], &config).is_err());
}
