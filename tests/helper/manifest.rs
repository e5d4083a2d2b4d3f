//! Manifest test utilities

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

/// Write `package` as package.json into a fresh temporary directory
pub fn write_package_json(package: Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");
    std::fs::write(&path, serde_json::to_string_pretty(&package).unwrap()).unwrap();
    (temp_dir, path)
}
