use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for swapnext operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure tied to a specific path.
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Publishing failed and the previous slot could not be moved back.
    #[error(
        "Failed to publish {}: {source}; previous contents kept at {}",
        slot.display(),
        retired.display()
    )]
    SlotStranded {
        slot: PathBuf,
        retired: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cursor file contents are not a base-10 unsigned integer.
    #[error("Cursor file {} does not contain an integer: {content:?}", path.display())]
    CursorParse { path: PathBuf, content: String },

    /// Neither the next index nor index 1 exists in the asset store.
    #[error("No asset found after index {after} or at index 1 in {}", assets.display())]
    AssetNotFound { after: i64, assets: PathBuf },

    /// Rotation root is missing or not a directory.
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Attach a path and action to an I/O error.
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| AppError::Filesystem { action, path, source }
    }

    /// Closest `io::ErrorKind` for callers that branch on error kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } | AppError::SlotStranded { source, .. } => {
                source.kind()
            }
            AppError::CursorParse { .. } => io::ErrorKind::InvalidData,
            AppError::InvalidConfig(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::AssetNotFound { .. } | AppError::RootNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
