//! Test double for `AssetStore`.

use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::AssetStore;

/// In-memory asset store tracking which index occupies the published slot.
#[derive(Clone, Debug, Default)]
#[allow(dead_code)]
pub struct MemoryAssetStore {
    pub assets: Arc<Mutex<BTreeSet<u64>>>,
    pub published: Arc<Mutex<Option<u64>>>,
    pub publish_calls: Arc<Mutex<Vec<u64>>>,
    pub fail_publish: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MemoryAssetStore {
    pub fn with_assets(indices: impl IntoIterator<Item = u64>) -> Self {
        let store = Self::default();
        store.assets.lock().unwrap().extend(indices);
        store
    }

    pub fn with_published(self, index: u64) -> Self {
        *self.published.lock().unwrap() = Some(index);
        self
    }

    /// Make every publish fail with a permission error.
    pub fn failing(self) -> Self {
        *self.fail_publish.lock().unwrap() = true;
        self
    }

    pub fn published(&self) -> Option<u64> {
        *self.published.lock().unwrap()
    }

    pub fn publish_calls(&self) -> Vec<u64> {
        self.publish_calls.lock().unwrap().clone()
    }
}

impl AssetStore for MemoryAssetStore {
    fn exists(&self, index: u64) -> bool {
        self.assets.lock().unwrap().contains(&index)
    }

    fn publish(&self, index: u64) -> Result<(), AppError> {
        self.publish_calls.lock().unwrap().push(index);
        if *self.fail_publish.lock().unwrap() {
            return Err(AppError::Io(io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        if !self.exists(index) {
            return Err(AppError::Io(io::Error::from(io::ErrorKind::NotFound)));
        }
        *self.published.lock().unwrap() = Some(index);
        Ok(())
    }

    fn published_exists(&self) -> bool {
        self.published().is_some()
    }
}
