use crate::domain::{AppError, Cursor};

/// Port for persisting the rotation cursor.
pub trait CursorStore {
    /// Read the stored cursor, creating it as `Cursor::INITIAL` when absent.
    ///
    /// The bootstrap write happens immediately and is not undone if the
    /// caller later fails.
    fn load_or_init(&self) -> Result<Cursor, AppError>;

    /// Read the stored cursor without creating it.
    fn peek(&self) -> Result<Option<Cursor>, AppError>;

    /// Overwrite the stored cursor.
    fn save(&self, cursor: Cursor) -> Result<(), AppError>;
}
