//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use lectio::model::{
    Document, DocumentId, Highlight, HighlightId, NewHighlight, ReaderModel, Session, UserId,
};
use lectio::store::MemoryStore;
use lectio::util::text::char_slice;
use lectio::Runtime;

pub const USER: &str = "reader-1";
pub const DOC: &str = "psalm-34-8";

pub fn user() -> UserId {
    UserId::new(USER)
}

pub fn doc_id() -> DocumentId {
    DocumentId::new(DOC)
}

/// Create a reader model over `text` with no highlights loaded
pub fn test_model(text: &str) -> ReaderModel {
    ReaderModel::new(Session::new(user()), Document::new(doc_id(), text))
}

/// Create a reader model whose highlight list already holds `highlights`
pub fn test_model_with_highlights(text: &str, highlights: Vec<Highlight>) -> ReaderModel {
    let mut model = test_model(text);
    model.highlights = highlights;
    model.highlights_loaded = true;
    model
}

/// A persisted row over `[start, end)` of `text`
pub fn highlight(text: &str, start: usize, end: usize) -> Highlight {
    NewHighlight {
        user_id: user(),
        document_id: doc_id(),
        start_offset: start,
        end_offset: end,
        highlighted_text: char_slice(text, start, end).to_string(),
    }
    .into_highlight(HighlightId::generate())
}

/// Character span of the first occurrence of `needle` in `text`
pub fn span_of(text: &str, needle: &str) -> (usize, usize) {
    let byte = text
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in {:?}", needle, text));
    let start = text[..byte].chars().count();
    (start, start + needle.chars().count())
}

/// A started runtime over a memory store seeded with `rows`
pub fn test_runtime(text: &str, rows: Vec<Highlight>) -> Runtime<MemoryStore> {
    let mut runtime = Runtime::new(test_model(text), MemoryStore::with_rows(rows));
    runtime.start();
    runtime
}

/// `(start, end, text)` triples for comparing rows without ids
pub fn spans(rows: &[Highlight]) -> Vec<(usize, usize, String)> {
    rows.iter()
        .map(|h| (h.start_offset, h.end_offset, h.highlighted_text.clone()))
        .collect()
}

/// Same as `spans`, for rows waiting to be inserted
pub fn new_spans(rows: &[NewHighlight]) -> Vec<(usize, usize, String)> {
    rows.iter()
        .map(|h| (h.start_offset, h.end_offset, h.highlighted_text.clone()))
        .collect()
}
