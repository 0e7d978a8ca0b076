//! Logical path parsing and resolution
//!
//! A logical file reference is a (name, extension, directory) triple. The
//! read path receives it as a single string and recovers the parts by
//! splitting the trailing component on the last `/`, then on the last `.`.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Name and extension recovered from a logical path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalFile {
    pub name: String,
    pub extension: String,
}

impl LogicalFile {
    /// The `name.extension` filename.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// The `name_temp.extension` filename used for temp copies.
    pub fn temp_file_name(&self) -> String {
        format!("{}_temp.{}", self.name, self.extension)
    }
}

/// Splits a logical path into name and extension.
///
/// Only the component after the last `/` is considered. Fails with
/// `FileComponentTooSmall` when that component has no `.` at all,
/// `FileNameMissing` when the name part is empty, and `FileTypeMissing`
/// when the extension part is empty.
pub fn parse_logical_path(logical_path: &str) -> Result<LogicalFile, StoreError> {
    let trailing = match logical_path.rsplit_once('/') {
        Some((_, trailing)) => trailing,
        None => logical_path,
    };

    let Some((name, extension)) = trailing.rsplit_once('.') else {
        return Err(StoreError::FileComponentTooSmall(logical_path.to_string()));
    };

    if name.is_empty() {
        return Err(StoreError::FileNameMissing);
    }

    if extension.is_empty() {
        return Err(StoreError::FileTypeMissing);
    }

    Ok(LogicalFile {
        name: name.to_string(),
        extension: extension.to_string(),
    })
}

/// Joins base directory, subdirectory, name, and extension into the
/// absolute path a file lives at.
pub fn resolve_file_path(base_dir: &Path, directory: &str, name: &str, extension: &str) -> PathBuf {
    base_dir.join(directory).join(format!("{}.{}", name, extension))
}

/// Validates a caller-supplied file name.
///
/// An empty name produces a file that can never be referenced back, and a
/// separator would move the file out of its directory.
pub fn validate_file_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::FileNameMissing);
    }

    if name.contains('/') || name.contains('\\') {
        return Err(StoreError::InvalidFilePath(name.to_string()));
    }

    Ok(())
}

/// Validates a subdirectory name: a single non-empty path component.
pub fn validate_directory_name(directory: &str) -> Result<(), StoreError> {
    if directory.is_empty() || directory.contains('/') || directory.contains('\\') {
        return Err(StoreError::InvalidFilePath(directory.to_string()));
    }

    Ok(())
}
