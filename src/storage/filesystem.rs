//! File system operations
//!
//! Low-level filesystem calls shared by the store operations.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Create a directory, including intermediate directories
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Write bytes atomically via a sibling temp file and rename
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
    ));

    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)
}

/// Remove every direct child of a directory, leaving the directory itself.
///
/// Files are removed individually; child directories are removed with their
/// contents.
pub fn clear_directory(path: &Path) -> Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        if child.is_dir() {
            fs::remove_dir_all(&child)?;
        } else {
            fs::remove_file(&child)?;
        }
    }
    Ok(())
}
