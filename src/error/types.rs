//! Error types
//!
//! Closed error taxonomy for the media store. Every failure is terminal for
//! the call that produced it; nothing here is retried internally.

use std::fmt;

/// Store operation errors
#[derive(Debug)]
pub enum StoreError {
    /// A logical path did not split into at least name and extension
    FileComponentTooSmall(String),
    /// The name part of a logical path was empty
    FileNameMissing,
    /// The extension was empty where one is required
    FileTypeMissing,
    /// The base directory could not be resolved, or a path was malformed
    InvalidFilePath(String),
    /// An expected file or directory was absent
    FileNotFound(String),
    /// A write step failed, or post-write verification did not find the file
    WriteFailed(String),
    /// A read step failed, or a source buffer was empty
    ReadFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::FileComponentTooSmall(p) => {
                write!(f, "Logical path has too few components: {}", p)
            }
            StoreError::FileNameMissing => write!(f, "File name is missing"),
            StoreError::FileTypeMissing => write!(f, "File extension is missing"),
            StoreError::InvalidFilePath(p) => write!(f, "Invalid file path: {}", p),
            StoreError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StoreError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
            StoreError::ReadFailed(msg) => write!(f, "Read failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
