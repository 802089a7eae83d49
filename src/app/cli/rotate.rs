//! Rotate command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, RotationMode};

pub fn run_rotate(root: PathBuf, mode: Option<RotationMode>) -> Result<(), AppError> {
    let outcome = crate::app::api::rotate_at(root, mode)?;

    match outcome.mode {
        RotationMode::Directory => println!(
            "Copying the contents of {} to {}...",
            outcome.source_label, outcome.slot_label
        ),
        RotationMode::File => {
            println!("Copying the file {} to {}...", outcome.source_label, outcome.slot_label)
        }
    }
    if outcome.wrapped {
        println!("  Restarted at 1 (no asset after {})", outcome.previous);
    }
    println!("Done.");
    Ok(())
}
