pub mod rotation_config;

pub use rotation_config::{CONFIG_FILE, RotationConfig, SwapConfig, parse_config_content};
