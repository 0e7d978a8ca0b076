//! Storage result types
//!
//! Defines result structures returned by store operations.

use std::path::PathBuf;

use crate::payload::Payload;

/// Result of a read operation
#[derive(Debug, Clone)]
pub struct ReadResult {
    /// The full file contents
    pub payload: Payload,
    /// Path of the duplicate written into the temp directory
    pub temp_copy_path: PathBuf,
}
