//! Persisted highlight rows and their identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner of a set of highlights
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The chapter or passage a highlight belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row identifier assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightId(pub Uuid);

impl HighlightId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted highlight row.
///
/// `end_offset` is exclusive: the row covers characters
/// `start_offset..end_offset` of the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: HighlightId,
    pub user_id: UserId,
    pub document_id: DocumentId,
    pub start_offset: usize,
    pub end_offset: usize,
    pub highlighted_text: String,
    /// Backend timestamp, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Highlight {
    /// Half-open overlap test against `[start, end)`
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start_offset < end && self.end_offset > start
    }

    /// True when `[start, end)` lies entirely inside this highlight
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start_offset <= start && self.end_offset >= end
    }

    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A highlight row waiting to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHighlight {
    pub user_id: UserId,
    pub document_id: DocumentId,
    pub start_offset: usize,
    pub end_offset: usize,
    pub highlighted_text: String,
}

impl NewHighlight {
    /// Attach a fresh id, producing the row a local store persists
    pub fn into_highlight(self, id: HighlightId) -> Highlight {
        Highlight {
            id,
            user_id: self.user_id,
            document_id: self.document_id,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            highlighted_text: self.highlighted_text,
            created_at: None,
        }
    }
}
