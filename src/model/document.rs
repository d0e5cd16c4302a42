//! Document model - the source text and its derived segments

use super::highlight::DocumentId;
use crate::util::text::{char_slice, segment_at, tokenize, Segment};

/// Document state - the text being read and its tokenization
#[derive(Debug, Clone)]
pub struct Document {
    /// Chapter or passage identifier used to scope highlights
    pub id: DocumentId,
    /// The source text
    text: String,
    /// Segments derived from `text`, recomputed on every change
    segments: Vec<Segment>,
    /// Number of characters in `text`
    char_len: usize,
    /// Revision counter (incremented on each text change)
    pub revision: u64,
}

impl Document {
    /// Create a document with initial text
    pub fn new(id: DocumentId, text: impl Into<String>) -> Self {
        let text = text.into();
        let segments = tokenize(&text);
        let char_len = text.chars().count();
        Self {
            id,
            text,
            segments,
            char_len,
            revision: 0,
        }
    }

    /// Create an empty document
    pub fn empty(id: DocumentId) -> Self {
        Self::new(id, String::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Replace the text and retokenize
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.segments = tokenize(&self.text);
        self.char_len = self.text.chars().count();
        self.revision += 1;
    }

    /// Substring by character offsets `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> &str {
        char_slice(&self.text, start, end)
    }

    /// The segment under a character offset
    pub fn segment_at(&self, offset: usize) -> Option<&Segment> {
        segment_at(&self.segments, offset)
    }

    /// The word segment under a character offset, if any
    pub fn word_at(&self, offset: usize) -> Option<&Segment> {
        self.segment_at(offset).filter(|s| s.is_word)
    }
}
