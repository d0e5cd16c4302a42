//! In-process highlight store

use std::cell::RefCell;

use super::{sort_rows, validate_rows, HighlightStore, StoreError};
use crate::model::{DocumentId, Highlight, HighlightId, NewHighlight, UserId};

/// Keeps rows in a `Vec`. Supports one-shot failure injection so callers
/// can exercise their error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Highlight>,
    fail_list: RefCell<Option<String>>,
    fail_insert: Option<String>,
    fail_delete: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing rows
    pub fn with_rows(rows: Vec<Highlight>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Every row, regardless of owner
    pub fn rows(&self) -> &[Highlight] {
        &self.rows
    }

    /// Make the next `list` call fail with `message`
    pub fn fail_next_list(&self, message: impl Into<String>) {
        *self.fail_list.borrow_mut() = Some(message.into());
    }

    /// Make the next `insert` call fail with `message`
    pub fn fail_next_insert(&mut self, message: impl Into<String>) {
        self.fail_insert = Some(message.into());
    }

    /// Make the next `delete` call fail with `message`
    pub fn fail_next_delete(&mut self, message: impl Into<String>) {
        self.fail_delete = Some(message.into());
    }
}

impl HighlightStore for MemoryStore {
    fn list(&self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError> {
        if let Some(message) = self.fail_list.borrow_mut().take() {
            return Err(StoreError::Injected(message));
        }
        let mut rows: Vec<Highlight> = self
            .rows
            .iter()
            .filter(|h| &h.user_id == user && &h.document_id == document)
            .cloned()
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }

    fn insert(&mut self, rows: &[NewHighlight]) -> Result<Vec<Highlight>, StoreError> {
        if let Some(message) = self.fail_insert.take() {
            return Err(StoreError::Injected(message));
        }
        validate_rows(rows)?;
        let inserted: Vec<Highlight> = rows
            .iter()
            .cloned()
            .map(|row| row.into_highlight(HighlightId::generate()))
            .collect();
        self.rows.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    fn delete(&mut self, user: &UserId, ids: &[HighlightId]) -> Result<usize, StoreError> {
        if let Some(message) = self.fail_delete.take() {
            return Err(StoreError::Injected(message));
        }
        let before = self.rows.len();
        self.rows
            .retain(|h| !(&h.user_id == user && ids.contains(&h.id)));
        Ok(before - self.rows.len())
    }
}
