pub mod reset;
pub mod rotate;
pub mod status;
