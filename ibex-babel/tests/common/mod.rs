//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Builds a well-formed Linger document from `(experiment, item, condition, words)` rows.
pub fn linger_source(items: &[(String, i64, String, Vec<String>)]) -> String {
    items
        .iter()
        .map(|(experiment, item, condition, words)| {
            format!("# {experiment} {item} {condition}\n{}\n", words.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
