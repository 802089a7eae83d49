use std::path::PathBuf;

use tracing::debug;

use crate::adapters::staging;
use crate::domain::{AppError, Layout};
use crate::ports::AssetStore;

/// Asset store of numbered directories published into a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssetStore {
    layout: Layout,
}

impl DirectoryAssetStore {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    fn asset_path(&self, index: u64) -> PathBuf {
        self.layout.asset_path(index)
    }
}

impl AssetStore for DirectoryAssetStore {
    fn exists(&self, index: u64) -> bool {
        self.asset_path(index).is_dir()
    }

    fn publish(&self, index: u64) -> Result<(), AppError> {
        let source = self.asset_path(index);
        let slot = self.layout.published_path();
        debug!(source = %source.display(), slot = %slot.display(), "publishing directory");
        staging::replace_dir(&source, &slot)
    }

    fn published_exists(&self) -> bool {
        staging::occupied(&self.layout.published_path())
    }
}
