//! Staged replacement of a published slot.
//!
//! New content is copied into a hidden temporary sibling of the slot first and
//! only then renamed into place, so a failed or interrupted copy never leaves
//! the slot empty or half-written.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tempfile::{Builder, TempDir};
use tracing::{debug, warn};

use crate::domain::AppError;

const STAGING_PREFIX: &str = ".swapnext-staging-";
const INCOMING: &str = "incoming";
const RETIRED: &str = "retired";

/// Recursively copy directory `source` to `destination`, which must not exist.
///
/// Symlinks are followed. Returns the number of files copied.
pub(crate) fn copy_tree(source: &Path, destination: &Path) -> Result<u64, AppError> {
    fs::create_dir(destination).map_err(AppError::filesystem("create", destination))?;

    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(AppError::filesystem("read", source))? {
        let entry = entry.map_err(AppError::filesystem("read", source))?;
        let from = entry.path();
        let to = destination.join(entry.file_name());
        let metadata = fs::metadata(&from).map_err(AppError::filesystem("inspect", &from))?;

        if metadata.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(AppError::filesystem("copy", &from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Replace directory `slot` with a copy of directory `source`.
pub(crate) fn replace_dir(source: &Path, slot: &Path) -> Result<(), AppError> {
    let staging = staging_dir(slot)?;
    let staged = staging.path().join(INCOMING);
    let retired = staging.path().join(RETIRED);

    let files = copy_tree(source, &staged)?;
    debug!(files, staged = %staged.display(), "staged directory copy");

    let had_previous = occupied(slot);
    if had_previous {
        fs::rename(slot, &retired).map_err(AppError::filesystem("move aside", slot))?;
    }

    if let Err(err) = fs::rename(&staged, slot) {
        if had_previous {
            return Err(restore_previous(staging, slot, err));
        }
        return Err(AppError::filesystem("publish", slot)(err));
    }

    discard(staging);
    Ok(())
}

/// Move the retired slot back after a failed publish.
///
/// When that fails too the staging directory is kept on disk so the previous
/// contents survive, and the error names where they are.
fn restore_previous(staging: TempDir, slot: &Path, err: io::Error) -> AppError {
    let retired = staging.path().join(RETIRED);
    match fs::rename(&retired, slot) {
        Ok(()) => {
            discard(staging);
            AppError::filesystem("publish", slot)(err)
        }
        Err(restore) => {
            let retired = staging.keep().join(RETIRED);
            warn!(
                slot = %slot.display(),
                retired = %retired.display(),
                error = %restore,
                "could not restore previous slot"
            );
            AppError::SlotStranded { slot: slot.to_path_buf(), retired, source: err }
        }
    }
}

/// Replace file `slot` with a copy of file `source`.
pub(crate) fn replace_file(source: &Path, slot: &Path) -> Result<(), AppError> {
    let parent = slot_parent(slot)?;
    let mut staged = Builder::new()
        .prefix(STAGING_PREFIX)
        .tempfile_in(parent)
        .map_err(AppError::filesystem("stage", parent))?;

    let mut input = File::open(source).map_err(AppError::filesystem("open", source))?;
    let permissions =
        input.metadata().map_err(AppError::filesystem("inspect", source))?.permissions();
    let bytes = io::copy(&mut input, staged.as_file_mut())
        .map_err(AppError::filesystem("copy", source))?;
    staged
        .as_file()
        .sync_all()
        .map_err(AppError::filesystem("sync", staged.path().to_path_buf()))?;
    fs::set_permissions(staged.path(), permissions)
        .map_err(AppError::filesystem("set permissions on", staged.path().to_path_buf()))?;
    debug!(bytes, staged = %staged.path().display(), "staged file copy");

    staged.persist(slot).map_err(|err| AppError::filesystem("publish", slot)(err.error))?;
    Ok(())
}

/// Whether anything (file, directory or dangling link) sits at `path`.
pub(crate) fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn slot_parent(slot: &Path) -> Result<&Path, AppError> {
    let parent = match slot.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(AppError::filesystem("create", parent))?;
    Ok(parent)
}

fn staging_dir(slot: &Path) -> Result<TempDir, AppError> {
    let parent = slot_parent(slot)?;
    Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(AppError::filesystem("stage", parent))
}

fn discard(staging: TempDir) {
    let path = staging.path().to_path_buf();
    if let Err(err) = staging.close() {
        warn!(path = %path.display(), error = %err, "could not remove staging directory");
    }
}
