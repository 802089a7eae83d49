//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::{CursorFile, asset_store_for, load_config};
use crate::app::{
    AppContext,
    commands::{reset, rotate, status},
};
use crate::ports::AssetStore;

pub use crate::app::commands::reset::ResetOutcome;
pub use crate::app::commands::rotate::RotateOutcome;
pub use crate::app::commands::status::StatusReport;
pub use crate::domain::{AppError, Cursor, RotationMode};

/// Create an `AppContext` for a rotation root.
///
/// Reads `swapnext.toml` when present; `mode` overrides the configured mode.
fn create_context(
    root: &Path,
    mode: Option<RotationMode>,
) -> Result<AppContext<CursorFile, Box<dyn AssetStore>>, AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }

    let config = load_config(root)?;
    let layout = config.rotation.resolve(root, mode)?;
    debug!(root = %root.display(), mode = %layout.mode(), "resolved layout");

    let cursor = CursorFile::new(layout.cursor_path());
    let assets = asset_store_for(&layout);
    Ok(AppContext::new(layout, cursor, assets))
}

/// Rotate the published slot in the current directory.
pub fn rotate(mode: Option<RotationMode>) -> Result<RotateOutcome, AppError> {
    rotate_at(std::env::current_dir()?, mode)
}

/// Rotate the published slot under `root` to the next numbered asset.
pub fn rotate_at(
    root: impl Into<PathBuf>,
    mode: Option<RotationMode>,
) -> Result<RotateOutcome, AppError> {
    let root: PathBuf = root.into();
    let ctx = create_context(&root, mode)?;
    rotate::execute(&ctx)
}

/// Inspect the rotation state in the current directory.
pub fn status(mode: Option<RotationMode>) -> Result<StatusReport, AppError> {
    status_at(std::env::current_dir()?, mode)
}

/// Inspect the rotation state under `root` without modifying it.
pub fn status_at(
    root: impl Into<PathBuf>,
    mode: Option<RotationMode>,
) -> Result<StatusReport, AppError> {
    let root: PathBuf = root.into();
    let ctx = create_context(&root, mode)?;
    status::execute(&ctx)
}

/// Overwrite the cursor in the current directory.
pub fn reset(mode: Option<RotationMode>, to: i64) -> Result<ResetOutcome, AppError> {
    reset_at(std::env::current_dir()?, mode, to)
}

/// Overwrite the cursor under `root` with `to`.
pub fn reset_at(
    root: impl Into<PathBuf>,
    mode: Option<RotationMode>,
    to: i64,
) -> Result<ResetOutcome, AppError> {
    let root: PathBuf = root.into();
    let ctx = create_context(&root, mode)?;
    reset::execute(&ctx, Cursor::new(to))
}
