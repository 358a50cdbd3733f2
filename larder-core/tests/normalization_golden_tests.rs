//! Golden file tests for ingredient normalization and categorization.
//!
//! Test cases are individual JSON files in `fixtures/normalization/`, one
//! subdirectory per source (currently only `curated/`).
//!
//! Test format:
//! ```json
//! {
//!   "raw": "1 cup butter, softened",
//!   "expected": { "name": "butter", "category": "dairy" }
//! }
//! ```

use glob::glob;
use larder_core::{classify, normalize, Category};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    /// Raw ingredient string as it appears in a recipe
    raw: String,
    expected: Expected,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
struct Expected {
    name: String,
    category: Category,
}

fn run_pipeline(raw: &str) -> Expected {
    let name = normalize(raw);
    let category = classify(&name);
    Expected { name, category }
}

fn load_test_cases(subdir: &str) -> Vec<(String, TestCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/normalization")
        .join(subdir)
        .join("*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = format!("{}/{}", subdir, path.file_stem().unwrap().to_string_lossy());
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_normalization_curated() {
    let cases = load_test_cases("curated");
    assert!(!cases.is_empty(), "No curated fixtures found");

    let mut failures = Vec::new();
    for (name, case) in &cases {
        let actual = run_pipeline(&case.raw);
        if actual != case.expected {
            failures.push((name, &case.raw, &case.expected, actual));
        }
    }

    if !failures.is_empty() {
        let mut msg = format!(
            "\n{} failures across {} curated tests:\n",
            failures.len(),
            cases.len()
        );

        for (name, raw, expected, actual) in &failures {
            msg.push_str(&format!("\n=== {} ===\n", name));
            msg.push_str(&format!("Input: {:?}\n", raw));
            msg.push_str(&format!("Expected: {:#?}\n", expected));
            msg.push_str(&format!("Actual:   {:#?}\n", actual));
        }

        panic!("{}", msg);
    }
}

/// Normalizing a canonical name again must not change it.
#[test]
fn test_normalization_is_stable_on_fixtures() {
    for (name, case) in load_test_cases("curated") {
        let once = normalize(&case.raw);
        assert_eq!(normalize(&once), once, "unstable normalization for {name}");
        assert!(!once.is_empty(), "empty canonical name for {name}");
    }
}
