//! Reset command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, RotationMode};

pub fn run_reset(root: PathBuf, mode: Option<RotationMode>, to: i64) -> Result<(), AppError> {
    let outcome = crate::app::api::reset_at(root, mode, to)?;

    match outcome.previous {
        Some(previous) => println!("✅ Cursor reset from {} to {}", previous, outcome.cursor),
        None => println!("✅ Cursor set to {}", outcome.cursor),
    }
    Ok(())
}
