pub mod ports;

#[allow(unused_imports)]
pub use ports::MemoryAssetStore;
#[allow(unused_imports)]
pub use ports::MemoryCursorStore;
