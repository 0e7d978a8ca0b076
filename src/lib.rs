//! media-store
//!
//! Writes byte payloads to files under a platform documents directory, reads
//! them back with a temp-copy side effect, and deletes files or whole
//! directories. A thin media-save path hands data to an OS-level sink.

pub mod config;
pub mod error;
pub mod media;
pub mod payload;
pub mod storage;

pub use config::StoreConfig;
pub use error::StoreError;
pub use media::{MediaKind, MediaSink};
pub use payload::Payload;
pub use storage::{ReadResult, SharedStore, Store};
