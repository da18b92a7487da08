use std::path::PathBuf;

use super::*;
use crate::runner::{FileReport, RunStats};

fn report() -> BatchReport {
    BatchReport {
        results: vec![
            FileReport {
                path: PathBuf::from("docs/b.md"),
                fingerprint: Some("h".to_string()),
                violations: vec![
                    Violation::new("section-order", 4, "late"),
                    Violation::new("require-section-license", 1, "missing"),
                ],
                from_cache: true,
            },
            FileReport {
                path: PathBuf::from("a.md"),
                fingerprint: Some("h".to_string()),
                violations: vec![],
                from_cache: false,
            },
        ],
        stats: RunStats {
            files: 2,
            cache_hits: 1,
            evaluated: 1,
            failures: 0,
        },
        persist_error: None,
    }
}

#[test]
fn json_summary_counts() {
    let output = JsonFormatter.format(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["summary"]["files_with_issues"], 1);
    assert_eq!(value["summary"]["issues"], 2);
    assert_eq!(value["summary"]["cache_hits"], 1);
}

#[test]
fn json_results_sorted_by_path_then_line() {
    let output = JsonFormatter.format(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let results = value["results"].as_array().unwrap();

    assert_eq!(results[0]["path"], "a.md");
    assert!(results[0]["violations"].as_array().unwrap().is_empty());
    assert_eq!(results[1]["path"], "docs/b.md");
    let violations = results[1]["violations"].as_array().unwrap();
    assert_eq!(violations[0]["rule_id"], "require-section-license");
    assert_eq!(violations[0]["line_number"], 1);
    assert_eq!(violations[1]["message"], "late");
}
