//! Media kinds and save destinations.

pub mod content_type;
pub mod sink;

pub use content_type::MediaKind;
pub use sink::MediaSink;

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub use sink::PicturesSink;
