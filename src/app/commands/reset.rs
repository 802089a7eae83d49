use serde::Serialize;
use tracing::warn;

use crate::app::AppContext;
use crate::domain::{AppError, Cursor};
use crate::ports::{AssetStore, CursorStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    /// Readable cursor before the reset, if any.
    pub previous: Option<Cursor>,
    pub cursor: Cursor,
}

/// Overwrite the stored cursor with `to`. The published slot is left alone.
///
/// An unreadable cursor file is replaced rather than reported, so this also
/// repairs a corrupted cursor.
pub fn execute<C: CursorStore, A: AssetStore>(
    ctx: &AppContext<C, A>,
    to: Cursor,
) -> Result<ResetOutcome, AppError> {
    let previous = match ctx.cursor().peek() {
        Ok(previous) => previous,
        Err(AppError::CursorParse { content, .. }) => {
            warn!(content = %content, "replacing unreadable cursor");
            None
        }
        Err(err) => return Err(err),
    };

    ctx.cursor().save(to)?;
    Ok(ResetOutcome { previous, cursor: to })
}
