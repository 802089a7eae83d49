pub mod configuration;
pub mod cursor;
pub mod error;
pub mod layout;
pub mod rotation;

pub use configuration::{CONFIG_FILE, RotationConfig, SwapConfig, parse_config_content};
pub use cursor::Cursor;
pub use error::AppError;
pub use layout::{Layout, RotationMode};
pub use rotation::{FIRST_INDEX, RotationPlan, plan_rotation};
