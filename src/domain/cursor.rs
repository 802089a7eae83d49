//! Persisted rotation cursor.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

/// Index of the asset currently held by the published slot.
///
/// `0` means nothing has been published yet. Hand-edited files may hold a
/// negative value; such a cursor has no successor in the asset store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    pub const INITIAL: Cursor = Cursor(0);
    pub const FIRST: Cursor = Cursor(1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Asset index this cursor names, `None` for zero and negative values.
    pub fn asset_index(self) -> Option<u64> {
        u64::try_from(self.0).ok().filter(|index| *index >= 1)
    }

    /// The asset index that directly follows this cursor.
    ///
    /// `None` when the next value would be zero, negative or out of range.
    pub fn successor(self) -> Option<u64> {
        self.0.checked_add(1).map(Cursor).and_then(Cursor::asset_index)
    }

    /// Cursor pointing at asset `index`, if the value fits.
    pub fn from_index(index: u64) -> Option<Self> {
        i64::try_from(index).ok().map(Cursor)
    }

    /// Parse the text stored in a cursor file.
    ///
    /// Surrounding whitespace is ignored; anything else must be a base-10 integer.
    pub fn parse(content: &str, source: &Path) -> Result<Self, AppError> {
        content.trim().parse::<i64>().map(Cursor).map_err(|_| AppError::CursorParse {
            path: source.to_path_buf(),
            content: content.to_string(),
        })
    }

    /// Text written back to the cursor file.
    pub fn to_file_content(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
