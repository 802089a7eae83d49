use serde::Serialize;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, Cursor, RotationMode, plan_rotation};
use crate::ports::{AssetStore, CursorStore};

/// What a successful rotation published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotateOutcome {
    pub mode: RotationMode,
    /// Cursor before the rotation.
    pub previous: Cursor,
    /// Index now held by the published slot and stored in the cursor.
    pub published: Cursor,
    /// The successor was missing and the rotation restarted at index 1.
    pub wrapped: bool,
    /// Root-relative label of the copied asset, e.g. `/Rendered/4`.
    pub source_label: String,
    /// Root-relative label of the published slot, e.g. `/Current`.
    pub slot_label: String,
}

/// Advance the cursor and publish the next asset.
///
/// The cursor file is bootstrapped before anything else. The chosen asset is
/// confirmed to exist before the published slot is touched, and the cursor is
/// only written after the publish succeeds.
pub fn execute<C: CursorStore, A: AssetStore>(
    ctx: &AppContext<C, A>,
) -> Result<RotateOutcome, AppError> {
    let layout = ctx.layout();
    let cursor = ctx.cursor().load_or_init()?;
    debug!(cursor = cursor.get(), "loaded cursor");

    let plan = plan_rotation(cursor, |index| ctx.assets().exists(index)).ok_or_else(|| {
        AppError::AssetNotFound { after: cursor.get(), assets: layout.assets_path() }
    })?;
    if plan.wrapped {
        info!(previous = cursor.get(), "no asset after cursor, restarting at 1");
    }

    let index = plan.index;
    ctx.assets().publish(index)?;
    ctx.cursor().save(plan.next)?;

    Ok(RotateOutcome {
        mode: layout.mode(),
        previous: plan.previous,
        published: plan.next,
        wrapped: plan.wrapped,
        source_label: layout.asset_label(index),
        slot_label: layout.published_label(),
    })
}
