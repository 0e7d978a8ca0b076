//! File storage facade
//!
//! Path resolution, read/write/delete operations, and the shared wrapper.

pub mod filesystem;
pub mod paths;
pub mod results;
pub mod shared;
pub mod store;

pub use paths::{LogicalFile, parse_logical_path, resolve_file_path};
pub use results::ReadResult;
pub use shared::SharedStore;
pub use store::{IdGenerator, Store};
