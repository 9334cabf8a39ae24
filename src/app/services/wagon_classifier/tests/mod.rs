//! Test utilities and fixtures for wagon classifier testing

use std::path::PathBuf;
use tempfile::TempDir;

// Test modules
mod classifier_tests;

/// Helper to create a temp directory and a store path inside it
pub fn create_store_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wagon_classifications.csv");
    (temp_dir, path)
}

/// Helper to write a classification store file with the given rows
pub fn write_store(path: &std::path::Path, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(path, content).unwrap();
}
