//! Shared helpers for unit tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// A fresh, empty notes directory removed when dropped.
pub fn create_test_notes_dir() -> TempDir {
    TempDir::new().expect("failed to create temp notes dir")
}

/// Writes `content` at `relative` under the notes dir, creating parent
/// directories as needed.
pub fn create_test_file(notes_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = notes_dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
