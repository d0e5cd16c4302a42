//! File-backed highlight store
//!
//! All rows live in one pretty-printed JSON document that is rewritten after
//! every mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{sort_rows, validate_rows, HighlightStore, StoreError};
use crate::model::{DocumentId, Highlight, HighlightId, NewHighlight, UserId};

/// On-disk layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredHighlights {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    pub highlights: Vec<Highlight>,
}

impl StoredHighlights {
    pub const CURRENT_VERSION: u32 = 1;
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoredHighlights,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that fails to parse is an error rather than silently discarded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let data: StoredHighlights = serde_json::from_str(&contents)?;
            tracing::debug!(
                "Loaded {} highlights from {}",
                data.highlights.len(),
                path.display()
            );
            data
        } else {
            tracing::debug!("No highlight file at {}, starting empty", path.display());
            StoredHighlights {
                version: StoredHighlights::CURRENT_VERSION,
                highlights: Vec::new(),
            }
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows across all users and documents
    pub fn len(&self) -> usize {
        self.data.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.highlights.is_empty()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.data.version = StoredHighlights::CURRENT_VERSION;
        let contents = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl HighlightStore for JsonFileStore {
    fn list(&self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError> {
        let mut rows: Vec<Highlight> = self
            .data
            .highlights
            .iter()
            .filter(|h| &h.user_id == user && &h.document_id == document)
            .cloned()
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }

    fn insert(&mut self, rows: &[NewHighlight]) -> Result<Vec<Highlight>, StoreError> {
        validate_rows(rows)?;
        let inserted: Vec<Highlight> = rows
            .iter()
            .cloned()
            .map(|row| row.into_highlight(HighlightId::generate()))
            .collect();
        self.data.highlights.extend(inserted.iter().cloned());
        self.save()?;
        Ok(inserted)
    }

    fn delete(&mut self, user: &UserId, ids: &[HighlightId]) -> Result<usize, StoreError> {
        let before = self.data.highlights.len();
        self.data
            .highlights
            .retain(|h| !(&h.user_id == user && ids.contains(&h.id)));
        let deleted = before - self.data.highlights.len();
        if deleted > 0 {
            self.save()?;
        }
        Ok(deleted)
    }
}
