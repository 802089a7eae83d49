use crate::domain::Layout;
use crate::ports::{AssetStore, CursorStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CursorStore, A: AssetStore> {
    layout: Layout,
    cursor: C,
    assets: A,
}

impl<C: CursorStore, A: AssetStore> AppContext<C, A> {
    /// Create a new application context.
    pub fn new(layout: Layout, cursor: C, assets: A) -> Self {
        Self { layout, cursor, assets }
    }

    /// Resolved locations for this rotation root.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get a reference to the cursor store.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Get a reference to the asset store.
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
