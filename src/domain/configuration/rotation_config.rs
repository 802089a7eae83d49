//! Rotation configuration loaded from `swapnext.toml`.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Layout, RotationMode};

/// Optional configuration file at the rotation root.
pub const CONFIG_FILE: &str = "swapnext.toml";

/// Top-level `swapnext.toml` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwapConfig {
    #[serde(default)]
    pub rotation: RotationConfig,
}

/// `[rotation]` table. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationConfig {
    /// Directory or file variant.
    #[serde(default)]
    pub mode: RotationMode,
    /// Cursor file, relative to the root.
    #[serde(default = "default_cursor_file")]
    pub cursor_file: String,
    /// Asset store directory, relative to the root.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Published slot, relative to the root. Defaults depend on the mode.
    #[serde(default)]
    pub published: Option<String>,
    /// Extension of file-variant assets, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            mode: RotationMode::default(),
            cursor_file: default_cursor_file(),
            assets_dir: default_assets_dir(),
            published: None,
            extension: default_extension(),
        }
    }
}

fn default_cursor_file() -> String {
    "current.txt".to_string()
}

fn default_assets_dir() -> String {
    "Rendered".to_string()
}

fn default_extension() -> String {
    "mp4".to_string()
}

impl RotationConfig {
    /// Published slot for `mode` when none is configured.
    pub fn default_published(&self, mode: RotationMode) -> String {
        match mode {
            RotationMode::Directory => "Current".to_string(),
            RotationMode::File => format!("{}/current.{}", self.assets_dir, self.extension),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let cursor_file = relative_path("cursor_file", &self.cursor_file)?;
        let assets_dir = relative_path("assets_dir", &self.assets_dir)?;
        if let Some(published) = &self.published {
            let published = relative_path("published", published)?;
            if published == assets_dir {
                return Err(AppError::config_error("published must differ from assets_dir"));
            }
            if published == cursor_file {
                return Err(AppError::config_error("published must differ from cursor_file"));
            }
        }

        if self.extension.is_empty() {
            return Err(AppError::config_error("extension must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(AppError::config_error(format!(
                "extension '{}' must not start with a dot",
                self.extension
            )));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(AppError::config_error(format!(
                "extension '{}' must not contain path separators",
                self.extension
            )));
        }

        Ok(())
    }

    /// Resolve paths against `root`. `mode_override` wins over the configured mode.
    pub fn resolve(
        &self,
        root: &Path,
        mode_override: Option<RotationMode>,
    ) -> Result<Layout, AppError> {
        self.validate()?;
        let mode = mode_override.unwrap_or(self.mode);
        let published = self.published.clone().unwrap_or_else(|| self.default_published(mode));

        Ok(Layout::new(
            root.to_path_buf(),
            mode,
            PathBuf::from(&self.cursor_file),
            PathBuf::from(&self.assets_dir),
            PathBuf::from(published),
            self.extension.clone(),
        ))
    }
}

fn relative_path(key: &str, value: &str) -> Result<PathBuf, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    let path = PathBuf::from(value);
    if !path.components().all(|component| matches!(component, Component::Normal(_))) {
        return Err(AppError::config_error(format!(
            "{} '{}' must be a relative path without '.' or '..' components",
            key, value
        )));
    }
    Ok(path)
}

/// Parse and validate `swapnext.toml` content.
pub fn parse_config_content(content: &str) -> Result<SwapConfig, AppError> {
    let config: SwapConfig = toml::from_str(content)?;
    config.rotation.validate()?;
    Ok(config)
}
