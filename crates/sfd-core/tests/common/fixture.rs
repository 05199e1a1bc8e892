//! Scratch folders populated with named files.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temp dir holding one small file per name; the content is the name.
pub fn folder_with(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in names {
        fs::write(dir.path().join(name), name.as_bytes()).expect("write fixture");
    }
    dir
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
