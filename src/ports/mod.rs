mod asset_store;
mod cursor_store;

pub use asset_store::AssetStore;
pub use cursor_store::CursorStore;
