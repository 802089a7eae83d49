use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Cursor, RotationMode, plan_rotation};
use crate::ports::{AssetStore, CursorStore};

/// Read-only snapshot of a rotation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub root: PathBuf,
    pub mode: RotationMode,
    /// Stored cursor, `None` when the cursor file does not exist yet.
    pub cursor: Option<Cursor>,
    /// Index the next rotation would publish, `None` when nothing resolves.
    pub next: Option<Cursor>,
    /// The next rotation would restart at index 1.
    pub wraps: bool,
    pub published_exists: bool,
}

/// Inspect the cursor and the asset the next rotation would publish.
///
/// Never creates or modifies anything.
pub fn execute<C: CursorStore, A: AssetStore>(
    ctx: &AppContext<C, A>,
) -> Result<StatusReport, AppError> {
    let cursor = ctx.cursor().peek()?;
    let plan =
        plan_rotation(cursor.unwrap_or(Cursor::INITIAL), |index| ctx.assets().exists(index));

    Ok(StatusReport {
        root: ctx.layout().root().to_path_buf(),
        mode: ctx.layout().mode(),
        cursor,
        next: plan.map(|plan| plan.next),
        wraps: plan.is_some_and(|plan| plan.wrapped),
        published_exists: ctx.assets().published_exists(),
    })
}
