//! Highlight persistence
//!
//! The highlight table is owned by an external backend. This module defines
//! the operations the engine needs from it and the concrete stores that
//! provide them.

pub mod cache;
pub mod json_file;
pub mod memory;
pub mod rest;

pub use cache::QueryCache;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::config::StoreConfig;
use crate::model::{DocumentId, Highlight, HighlightId, NewHighlight, UserId};

/// Errors reported by highlight stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed highlight data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Remote { status: u16, message: String },

    #[error("Invalid highlight row: {0}")]
    InvalidRow(String),

    #[error("No config directory available")]
    NoConfigDir,

    #[error("{0}")]
    Injected(String),
}

/// Operations against the externally-owned highlight table
pub trait HighlightStore {
    /// All rows for (user, document), ordered by `start_offset` ascending
    fn list(&self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError>;

    /// Insert rows as one batch, returning them with their assigned ids
    fn insert(&mut self, rows: &[NewHighlight]) -> Result<Vec<Highlight>, StoreError>;

    /// Delete rows by id as one batch. Only rows owned by `user` are removed.
    /// Returns the number of rows deleted.
    fn delete(&mut self, user: &UserId, ids: &[HighlightId]) -> Result<usize, StoreError>;
}

impl<S: HighlightStore + ?Sized> HighlightStore for Box<S> {
    fn list(&self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError> {
        (**self).list(user, document)
    }

    fn insert(&mut self, rows: &[NewHighlight]) -> Result<Vec<Highlight>, StoreError> {
        (**self).insert(rows)
    }

    fn delete(&mut self, user: &UserId, ids: &[HighlightId]) -> Result<usize, StoreError> {
        (**self).delete(user, ids)
    }
}

/// Open the store described by the configuration
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn HighlightStore>, StoreError> {
    match config {
        StoreConfig::File { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => crate::config_paths::highlights_file().ok_or(StoreError::NoConfigDir)?,
            };
            Ok(Box::new(JsonFileStore::open(path)?))
        }
        StoreConfig::Rest {
            url,
            api_key,
            access_token,
            table,
            timeout_secs,
        } => Ok(Box::new(RestStore::new(
            url,
            api_key,
            access_token.as_deref(),
            table,
            std::time::Duration::from_secs(*timeout_secs),
        )?)),
    }
}

/// Reject rows that break `start_offset < end_offset`
pub(crate) fn validate_rows(rows: &[NewHighlight]) -> Result<(), StoreError> {
    match rows.iter().find(|r| r.start_offset >= r.end_offset) {
        Some(row) => Err(StoreError::InvalidRow(format!(
            "start_offset {} is not before end_offset {}",
            row.start_offset, row.end_offset
        ))),
        None => Ok(()),
    }
}

/// Sort rows the way `list` must return them
pub(crate) fn sort_rows(rows: &mut [Highlight]) {
    rows.sort_by_key(|h| (h.start_offset, h.end_offset));
}
