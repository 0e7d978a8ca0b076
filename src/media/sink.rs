//! Media save capability
//!
//! The facade never branches on platform beyond base/temp directory
//! resolution; handing media to an OS-level destination goes through
//! [`MediaSink`], with implementations selected at build time.

use log::info;
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::StoreError;
use crate::media::content_type::MediaKind;
use crate::payload::Payload;
use crate::storage::filesystem;

/// Destination for media payloads outside the store's base directory.
pub trait MediaSink {
    /// Hands a payload of the given kind to the sink.
    fn save(&self, payload: &Payload, kind: MediaKind) -> Result<(), StoreError>;
}

/// Sink writing into the platform pictures directory.
///
/// Stands in for a photo-library destination on desktop targets; other
/// targets supply their own [`MediaSink`] implementation.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub struct PicturesSink {
    pictures_dir: PathBuf,
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
impl PicturesSink {
    /// Fails with `InvalidFilePath` when the platform pictures directory
    /// cannot be resolved.
    pub fn open() -> Result<Self, StoreError> {
        let pictures_dir = dirs::picture_dir().ok_or_else(|| {
            StoreError::InvalidFilePath("platform pictures directory unresolvable".into())
        })?;
        Ok(PicturesSink { pictures_dir })
    }

    /// Sink over an explicit directory.
    pub fn at(pictures_dir: impl Into<PathBuf>) -> Self {
        PicturesSink {
            pictures_dir: pictures_dir.into(),
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
impl MediaSink for PicturesSink {
    fn save(&self, payload: &Payload, kind: MediaKind) -> Result<(), StoreError> {
        filesystem::create_directory(&self.pictures_dir).map_err(|e| {
            StoreError::WriteFailed(format!("create {}: {}", self.pictures_dir.display(), e))
        })?;

        let file_path = self
            .pictures_dir
            .join(format!("{}.{}", Uuid::new_v4(), kind.extension()));

        filesystem::atomic_write(&file_path, payload.as_bytes()).map_err(|e| {
            StoreError::WriteFailed(format!("write {}: {}", file_path.display(), e))
        })?;

        info!(
            "Saved {} bytes of {} to {}",
            payload.len(),
            kind.tag(),
            file_path.display()
        );

        Ok(())
    }
}
