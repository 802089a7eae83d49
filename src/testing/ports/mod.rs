mod memory_asset_store;
mod memory_cursor_store;

pub use self::memory_asset_store::MemoryAssetStore;
pub use self::memory_cursor_store::MemoryCursorStore;
