//! Rotation modes and the resolved on-disk layout.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// What kind of entry the asset store holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    /// `Rendered/<N>/` directories published into a `Current/` directory.
    #[default]
    Directory,
    /// `Rendered/<N>.<ext>` files published into a single file.
    File,
}

impl RotationMode {
    pub fn label(self) -> &'static str {
        match self {
            RotationMode::Directory => "directory",
            RotationMode::File => "file",
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RotationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory" | "dir" => Ok(RotationMode::Directory),
            "file" => Ok(RotationMode::File),
            _ => Err(AppError::config_error(format!(
                "Invalid rotation mode '{}'. Expected 'directory' or 'file'.",
                s
            ))),
        }
    }
}

/// Fully resolved locations for one rotation root.
///
/// Relative parts are kept alongside the root so status lines can name
/// locations the way operators see them (`/Rendered/4`, `/Current`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    mode: RotationMode,
    cursor_file: PathBuf,
    assets_dir: PathBuf,
    published: PathBuf,
    extension: String,
}

impl Layout {
    pub fn new(
        root: PathBuf,
        mode: RotationMode,
        cursor_file: PathBuf,
        assets_dir: PathBuf,
        published: PathBuf,
        extension: String,
    ) -> Self {
        Self { root, mode, cursor_file, assets_dir, published, extension }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn cursor_path(&self) -> PathBuf {
        self.root.join(&self.cursor_file)
    }

    pub fn assets_path(&self) -> PathBuf {
        self.root.join(&self.assets_dir)
    }

    pub fn published_path(&self) -> PathBuf {
        self.root.join(&self.published)
    }

    /// Entry name of asset `index` inside the asset store.
    pub fn asset_name(&self, index: u64) -> String {
        match self.mode {
            RotationMode::Directory => index.to_string(),
            RotationMode::File => format!("{}.{}", index, self.extension),
        }
    }

    pub fn asset_path(&self, index: u64) -> PathBuf {
        self.assets_path().join(self.asset_name(index))
    }

    /// Root-relative label for asset `index`, e.g. `/Rendered/4`.
    pub fn asset_label(&self, index: u64) -> String {
        display_label(&self.assets_dir.join(self.asset_name(index)))
    }

    /// Root-relative label for the published slot, e.g. `/Current`.
    pub fn published_label(&self) -> String {
        display_label(&self.published)
    }
}

fn display_label(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
