//! Test double for `CursorStore`.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Cursor};
use crate::ports::CursorStore;

/// In-memory cursor with a record of every write.
#[derive(Clone, Debug, Default)]
#[allow(dead_code)]
pub struct MemoryCursorStore {
    pub stored: Arc<Mutex<Option<Cursor>>>,
    pub writes: Arc<Mutex<Vec<Cursor>>>,
    pub malformed: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MemoryCursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(self, value: i64) -> Self {
        *self.stored.lock().unwrap() = Some(Cursor::new(value));
        self
    }

    /// Make reads fail as if the stored text were `content`.
    pub fn with_malformed(self, content: &str) -> Self {
        *self.malformed.lock().unwrap() = Some(content.to_string());
        self
    }

    pub fn current(&self) -> Option<Cursor> {
        *self.stored.lock().unwrap()
    }

    pub fn writes(&self) -> Vec<Cursor> {
        self.writes.lock().unwrap().clone()
    }

    fn write(&self, cursor: Cursor) {
        *self.malformed.lock().unwrap() = None;
        *self.stored.lock().unwrap() = Some(cursor);
        self.writes.lock().unwrap().push(cursor);
    }
}

impl CursorStore for MemoryCursorStore {
    fn load_or_init(&self) -> Result<Cursor, AppError> {
        if let Some(cursor) = self.peek()? {
            return Ok(cursor);
        }
        self.write(Cursor::INITIAL);
        Ok(Cursor::INITIAL)
    }

    fn peek(&self) -> Result<Option<Cursor>, AppError> {
        if let Some(content) = self.malformed.lock().unwrap().clone() {
            return Err(AppError::CursorParse { path: "current.txt".into(), content });
        }
        Ok(self.current())
    }

    fn save(&self, cursor: Cursor) -> Result<(), AppError> {
        self.write(cursor);
        Ok(())
    }
}
