//! swapnext: rotate a published slot through a numbered sequence of rendered assets.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, Cursor, ResetOutcome, RotateOutcome, RotationMode, StatusReport, reset, reset_at,
    rotate, rotate_at, status, status_at,
};
