//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{DocumentId, Highlight, InteractionMode, UserId};

/// Pointer and touch interaction over the document text.
///
/// Offsets are character offsets into the document, as resolved by the
/// host's hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderMsg {
    /// Pointer-down or touch-start at an offset
    PointerDown { offset: usize },
    /// Pointer-move or touch-move at an offset
    PointerMove { offset: usize },
    /// Pointer-up or touch-end anywhere in the document
    PointerUp,
    /// Touch cancelled by the platform; abandons the drag
    PointerCancel,
    /// Switch to a specific mode
    SetMode(InteractionMode),
    /// Toggle highlight mode on/off
    ToggleHighlightMode,
    /// Toggle erase mode on/off
    ToggleEraseMode,
    /// Leave both highlight and erase modes
    ExitModes,
}

/// Document lifecycle messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Open a different document
    Open { id: DocumentId, text: String },
    /// Replace the text of the current document
    SetText(String),
    /// Ask for a fresh copy of the highlights
    Refresh,
}

/// Results reported back by the runtime after talking to the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreMsg {
    /// Highlight query finished
    HighlightsLoaded {
        user: UserId,
        document: DocumentId,
        result: Result<Vec<Highlight>, String>,
    },
    /// Both batches of a plan went through
    PlanApplied {
        document: DocumentId,
        deleted: usize,
        inserted: usize,
    },
    /// A batch failed; the remaining steps were not run
    PlanFailed { message: String },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Reader(ReaderMsg),
    Document(DocumentMsg),
    Store(StoreMsg),
}

impl From<ReaderMsg> for Msg {
    fn from(msg: ReaderMsg) -> Self {
        Msg::Reader(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<StoreMsg> for Msg {
    fn from(msg: StoreMsg) -> Self {
        Msg::Store(msg)
    }
}
