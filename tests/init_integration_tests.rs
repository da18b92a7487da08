//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    doc_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".doc-guard.toml");
    assert!(content.contains("[rules]"));
    assert!(content.contains("require-section-license"));
    assert!(content.contains("section-order"));
    assert!(content.contains("broken-link-check"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom-config.toml");

    doc_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    doc_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".doc-guard.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites_existing_config() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    doc_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".doc-guard.toml").contains("[scanner]"));
}

#[test]
fn generated_config_is_usable_by_lint() {
    let fixture = TestFixture::new();
    fixture.create_file("README.md", common::CLEAN_README);
    fixture.create_file("docs/guide.md", "# Guide\n## License\nMIT\n");

    doc_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    doc_guard!()
        .current_dir(fixture.path())
        .args(["lint", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found in 2 file(s)."));
}
