pub mod config_file;
pub mod cursor_file;
pub mod directory_assets;
pub mod file_assets;
mod staging;

use crate::domain::{Layout, RotationMode};
use crate::ports::AssetStore;

pub use config_file::load_config;
pub use cursor_file::CursorFile;
pub use directory_assets::DirectoryAssetStore;
pub use file_assets::FileAssetStore;

/// Filesystem asset store matching the layout's mode.
pub fn asset_store_for(layout: &Layout) -> Box<dyn AssetStore> {
    match layout.mode() {
        RotationMode::Directory => Box::new(DirectoryAssetStore::new(layout.clone())),
        RotationMode::File => Box::new(FileAssetStore::new(layout.clone())),
    }
}
