//! The file storage facade
//!
//! [`Store`] resolves logical (name, extension, directory) references to
//! absolute paths under its base directory and performs write, read, and
//! delete operations against them. Every call is an independent filesystem
//! transaction; the store keeps no cache of directory contents.

use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::payload::Payload;
use crate::storage::filesystem;
use crate::storage::paths::{self, parse_logical_path, resolve_file_path};
use crate::storage::results::ReadResult;

/// Generates a file name when `write` is called without one.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// File storage facade over a base directory and a temp directory.
///
/// Explicitly constructed and passed around by the caller; there is no
/// shared global instance.
pub struct Store {
    base_dir: PathBuf,
    temp_dir: PathBuf,
    media_dir: String,
    id_generator: IdGenerator,
}

impl Store {
    /// Create a store over explicit base and temp directories.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
        media_dir: impl Into<String>,
    ) -> Self {
        Store {
            base_dir: base_dir.into(),
            temp_dir: temp_dir.into(),
            media_dir: media_dir.into(),
            id_generator: Box::new(|| Uuid::new_v4().to_string()),
        }
    }

    /// Create a store over the platform documents and temp directories.
    pub fn open() -> Result<Self, StoreError> {
        Self::from_config(&StoreConfig::default())
    }

    /// Create a store from a loaded configuration.
    ///
    /// Fails with `InvalidFilePath` when no base directory is configured and
    /// the platform documents directory cannot be resolved.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let base_dir = match &config.base_dir {
            Some(dir) => dir.clone(),
            None => dirs::document_dir().ok_or_else(|| {
                StoreError::InvalidFilePath("platform documents directory unresolvable".into())
            })?,
        };

        let temp_dir = config
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        Ok(Store::new(base_dir, temp_dir, config.media_dir.clone()))
    }

    /// Replace the generator used for omitted file names.
    pub fn with_id_generator(mut self, generator: IdGenerator) -> Self {
        self.id_generator = generator;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    fn directory_name<'a>(&'a self, directory: Option<&'a str>) -> &'a str {
        directory.unwrap_or(&self.media_dir)
    }

    /// Writes a payload to `<base>/<directory>/<name>.<extension>`.
    ///
    /// Creates the directory (intermediate directories included) when absent,
    /// writes atomically via a sibling temp file, and verifies the file exists
    /// afterwards. When `name` is omitted a fresh id from the store's
    /// generator is used. Returns the resolved absolute path.
    pub fn write(
        &self,
        payload: impl Into<Payload>,
        name: Option<&str>,
        directory: Option<&str>,
        extension: &str,
    ) -> Result<PathBuf, StoreError> {
        if extension.is_empty() {
            return Err(StoreError::FileTypeMissing);
        }

        let payload = payload.into();
        let directory = self.directory_name(directory);
        paths::validate_directory_name(directory)?;

        let name = match name {
            Some(name) => name.to_string(),
            None => (self.id_generator)(),
        };
        paths::validate_file_name(&name)?;

        let dir_path = self.base_dir.join(directory);

        filesystem::create_directory(&dir_path).map_err(|e| {
            error!("Failed to create directory {}: {}", dir_path.display(), e);
            StoreError::WriteFailed(format!("create {}: {}", dir_path.display(), e))
        })?;

        let file_path = resolve_file_path(&self.base_dir, directory, &name, extension);

        filesystem::atomic_write(&file_path, payload.as_bytes()).map_err(|e| {
            error!("Failed to write {}: {}", file_path.display(), e);
            StoreError::WriteFailed(format!("write {}: {}", file_path.display(), e))
        })?;

        // Post-write verification
        if !filesystem::file_exists(&file_path) {
            return Err(StoreError::WriteFailed(format!(
                "{} missing after write",
                file_path.display()
            )));
        }

        info!(
            "Wrote {} bytes to {} (directory: {})",
            payload.len(),
            file_path.display(),
            directory
        );

        Ok(file_path)
    }

    /// Reads a file identified by a logical path.
    ///
    /// The trailing component of `logical_path` is split into name and
    /// extension and resolved under the media subdirectory. The whole file is
    /// read into memory and a duplicate named `<name>_temp.<extension>` is
    /// written into the temp directory as an observable side effect; its byte
    /// count is verified against the source.
    pub fn read(&self, logical_path: &str) -> Result<ReadResult, StoreError> {
        let logical = parse_logical_path(logical_path)?;

        let file_path = resolve_file_path(
            &self.base_dir,
            &self.media_dir,
            &logical.name,
            &logical.extension,
        );

        if !filesystem::file_exists(&file_path) {
            return Err(StoreError::FileNotFound(file_path.display().to_string()));
        }

        let bytes = fs::read(&file_path).map_err(|e| {
            error!("Failed to read {}: {}", file_path.display(), e);
            StoreError::ReadFailed(format!("read {}: {}", file_path.display(), e))
        })?;

        let temp_copy_path = self.temp_dir.join(logical.temp_file_name());

        filesystem::atomic_write(&temp_copy_path, &bytes).map_err(|e| {
            error!(
                "Failed to write temp copy {}: {}",
                temp_copy_path.display(),
                e
            );
            StoreError::WriteFailed(format!("write {}: {}", temp_copy_path.display(), e))
        })?;

        let copied_len = fs::metadata(&temp_copy_path)
            .map(|m| m.len())
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", temp_copy_path.display(), e)))?;

        if copied_len != bytes.len() as u64 {
            return Err(StoreError::WriteFailed(format!(
                "temp copy {} has {} bytes, expected {}",
                temp_copy_path.display(),
                copied_len,
                bytes.len()
            )));
        }

        info!(
            "Read {} bytes from {} (temp copy: {})",
            bytes.len(),
            file_path.display(),
            temp_copy_path.display()
        );

        Ok(ReadResult {
            payload: Payload::from(bytes),
            temp_copy_path,
        })
    }

    /// Deletes `<base>/<directory>/<name>.<extension>`.
    pub fn remove(
        &self,
        name: &str,
        extension: &str,
        directory: Option<&str>,
    ) -> Result<(), StoreError> {
        let directory = self.directory_name(directory);
        let file_path = resolve_file_path(&self.base_dir, directory, name, extension);
        remove_at(&file_path)
    }

    /// Deletes every direct child of `<base>/<directory>`.
    pub fn remove_all(&self, directory: Option<&str>) -> Result<(), StoreError> {
        let dir_path = self.base_dir.join(self.directory_name(directory));
        remove_all_at(&dir_path)
    }

    /// Deletes `<temp>/<name>.<extension>`.
    pub fn remove_temp(&self, name: &str, extension: &str) -> Result<(), StoreError> {
        let file_path = self.temp_dir.join(format!("{}.{}", name, extension));
        remove_at(&file_path)
    }

    /// Deletes every direct child of the temp directory.
    pub fn remove_all_temp(&self) -> Result<(), StoreError> {
        remove_all_at(&self.temp_dir)
    }
}

fn remove_at(file_path: &Path) -> Result<(), StoreError> {
    if !file_path.exists() {
        return Err(StoreError::FileNotFound(file_path.display().to_string()));
    }

    fs::remove_file(file_path).map_err(|e| {
        error!("Failed to delete {}: {}", file_path.display(), e);
        StoreError::WriteFailed(format!("delete {}: {}", file_path.display(), e))
    })?;

    info!("Deleted {}", file_path.display());
    Ok(())
}

fn remove_all_at(dir_path: &Path) -> Result<(), StoreError> {
    if !filesystem::directory_exists(dir_path) {
        return Err(StoreError::FileNotFound(dir_path.display().to_string()));
    }

    filesystem::clear_directory(dir_path).map_err(|e| {
        error!("Failed to clear {}: {}", dir_path.display(), e);
        StoreError::WriteFailed(format!("clear {}: {}", dir_path.display(), e))
    })?;

    info!("Cleared {}", dir_path.display());
    Ok(())
}
