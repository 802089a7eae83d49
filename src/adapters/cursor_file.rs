use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Cursor};
use crate::ports::CursorStore;

/// Cursor persisted as decimal text in a single file.
#[derive(Debug, Clone)]
pub struct CursorFile {
    path: PathBuf,
}

impl CursorFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<&Path, AppError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(AppError::filesystem("create", parent))?;
        Ok(parent)
    }

    /// Give the staged file the permissions of the cursor file it replaces.
    fn match_permissions(&self, staged: &Path) -> Result<(), AppError> {
        let permissions = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.permissions(),
            Err(err) if err.kind() == ErrorKind::NotFound => match fresh_permissions() {
                Some(permissions) => permissions,
                None => return Ok(()),
            },
            Err(err) => return Err(AppError::filesystem("inspect", &self.path)(err)),
        };
        fs::set_permissions(staged, permissions)
            .map_err(AppError::filesystem("set permissions on", staged))
    }
}

#[cfg(unix)]
fn fresh_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn fresh_permissions() -> Option<fs::Permissions> {
    None
}

impl CursorStore for CursorFile {
    fn load_or_init(&self) -> Result<Cursor, AppError> {
        if let Some(cursor) = self.peek()? {
            return Ok(cursor);
        }

        self.ensure_parent()?;
        fs::write(&self.path, Cursor::INITIAL.to_file_content())
            .map_err(AppError::filesystem("create", &self.path))?;
        debug!(path = %self.path.display(), "initialized cursor file");
        Ok(Cursor::INITIAL)
    }

    fn peek(&self) -> Result<Option<Cursor>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Cursor::parse(&content, &self.path).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::filesystem("read", &self.path)(err)),
        }
    }

    fn save(&self, cursor: Cursor) -> Result<(), AppError> {
        let parent = self.ensure_parent()?;
        let mut staged = tempfile::Builder::new()
            .prefix(".swapnext-cursor-")
            .tempfile_in(parent)
            .map_err(AppError::filesystem("stage", parent))?;
        staged
            .write_all(cursor.to_file_content().as_bytes())
            .map_err(AppError::filesystem("write", staged.path().to_path_buf()))?;
        self.match_permissions(staged.path())?;
        staged
            .persist(&self.path)
            .map_err(|err| AppError::filesystem("replace", &self.path)(err.error))?;
        debug!(path = %self.path.display(), cursor = cursor.get(), "saved cursor");
        Ok(())
    }
}
