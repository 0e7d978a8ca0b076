//! Error handling
//!
//! Defines the error type shared by all store operations.

pub mod types;

pub use types::*;
