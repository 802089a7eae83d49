//! Status command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, RotationMode};

pub fn run_status(root: PathBuf, mode: Option<RotationMode>, json: bool) -> Result<(), AppError> {
    let report = crate::app::api::status_at(root, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Root:      {}", report.root.display());
    println!("Mode:      {}", report.mode);
    match report.cursor {
        Some(cursor) => println!("Cursor:    {}", cursor),
        None => println!("Cursor:    (not initialized)"),
    }
    match report.next {
        Some(next) if report.wraps => println!("Next:      {} (restarts sequence)", next),
        Some(next) => println!("Next:      {}", next),
        None => println!("Next:      (no asset available)"),
    }
    println!("Published: {}", if report.published_exists { "present" } else { "absent" });
    Ok(())
}
