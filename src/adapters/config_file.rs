use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CONFIG_FILE, SwapConfig, parse_config_content};

/// Read `swapnext.toml` from `root`.
///
/// A missing file yields the built-in defaults; a present but invalid file is an error.
pub fn load_config(root: &Path) -> Result<SwapConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded rotation config");
            parse_config_content(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(SwapConfig::default()),
        Err(err) => Err(AppError::filesystem("read", path)(err)),
    }
}
