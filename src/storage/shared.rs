//! Shared store wrapper
//!
//! Serializes calls to a single [`Store`] across concurrent callers. Each
//! call holds the lock for its own duration only; multi-step sequences are
//! not coordinated beyond that.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::payload::Payload;
use crate::storage::results::ReadResult;
use crate::storage::store::Store;

/// Cloneable handle giving exclusive access to one store per call.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        SharedStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn write(
        &self,
        payload: impl Into<Payload>,
        name: Option<&str>,
        directory: Option<&str>,
        extension: &str,
    ) -> Result<PathBuf, StoreError> {
        self.inner.lock().await.write(payload, name, directory, extension)
    }

    pub async fn read(&self, logical_path: &str) -> Result<ReadResult, StoreError> {
        self.inner.lock().await.read(logical_path)
    }

    pub async fn remove(
        &self,
        name: &str,
        extension: &str,
        directory: Option<&str>,
    ) -> Result<(), StoreError> {
        self.inner.lock().await.remove(name, extension, directory)
    }

    pub async fn remove_all(&self, directory: Option<&str>) -> Result<(), StoreError> {
        self.inner.lock().await.remove_all(directory)
    }

    pub async fn remove_temp(&self, name: &str, extension: &str) -> Result<(), StoreError> {
        self.inner.lock().await.remove_temp(name, extension)
    }

    pub async fn remove_all_temp(&self) -> Result<(), StoreError> {
        self.inner.lock().await.remove_all_temp()
    }
}
