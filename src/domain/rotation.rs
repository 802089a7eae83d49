//! Pure rotation planning.
//!
//! Decides which asset comes next without touching the filesystem; callers
//! supply an existence probe for asset indices.

use serde::Serialize;

use crate::domain::Cursor;

/// Result of choosing the next asset for a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationPlan {
    /// Cursor value before the rotation.
    pub previous: Cursor,
    /// Cursor value persisted after the publish.
    pub next: Cursor,
    /// Asset index to publish.
    pub index: u64,
    /// True when the direct successor was missing and the plan fell back to index 1.
    pub wrapped: bool,
}

/// First asset index of every store.
pub const FIRST_INDEX: u64 = 1;

/// Choose the asset that follows `cursor`.
///
/// Only the direct successor is probed; when it is missing, or the cursor is
/// negative so that no successor exists, the plan resets to index 1. Returns
/// `None` when index 1 is missing as well.
pub fn plan_rotation(cursor: Cursor, exists: impl Fn(u64) -> bool) -> Option<RotationPlan> {
    if let Some(index) = cursor.successor()
        && exists(index)
        && let Some(next) = Cursor::from_index(index)
    {
        return Some(RotationPlan { previous: cursor, next, index, wrapped: false });
    }

    if exists(FIRST_INDEX) {
        return Some(RotationPlan {
            previous: cursor,
            next: Cursor::FIRST,
            index: FIRST_INDEX,
            wrapped: cursor.successor() != Some(FIRST_INDEX),
        });
    }

    None
}
