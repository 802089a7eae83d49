use std::path::PathBuf;

use tracing::debug;

use crate::adapters::staging;
use crate::domain::{AppError, Layout};
use crate::ports::AssetStore;

/// Asset store of numbered files (`<N>.<ext>`) published into a single file.
#[derive(Debug, Clone)]
pub struct FileAssetStore {
    layout: Layout,
}

impl FileAssetStore {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    fn asset_path(&self, index: u64) -> PathBuf {
        self.layout.asset_path(index)
    }
}

impl AssetStore for FileAssetStore {
    fn exists(&self, index: u64) -> bool {
        self.asset_path(index).is_file()
    }

    fn publish(&self, index: u64) -> Result<(), AppError> {
        let source = self.asset_path(index);
        let slot = self.layout.published_path();
        debug!(source = %source.display(), slot = %slot.display(), "publishing file");
        staging::replace_file(&source, &slot)
    }

    fn published_exists(&self) -> bool {
        staging::occupied(&self.layout.published_path())
    }
}
