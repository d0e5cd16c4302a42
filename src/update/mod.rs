//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod reader;
mod store;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ReaderModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use reader::update_reader;
pub use store::update_store;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ReaderModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ReaderModel, msg: Msg) -> Option<Cmd> {
    model.clear_expired_status();
    match msg {
        Msg::Reader(m) => reader::update_reader(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Store(m) => store::update_store(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after mode and selection state and logs diffs.
/// Pointer moves are noisy and skip the message log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut ReaderModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::ReaderMsg;

    let is_noisy = matches!(&msg, Msg::Reader(ReaderMsg::PointerMove { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Store results are summarized rather than dumped row by row.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::StoreMsg;

    match msg {
        Msg::Reader(m) => format!("Reader::{:?}", m),
        Msg::Document(m) => match m {
            crate::messages::DocumentMsg::Open { id, .. } => format!("Document::Open({})", id),
            crate::messages::DocumentMsg::SetText(_) => "Document::SetText".to_string(),
            crate::messages::DocumentMsg::Refresh => "Document::Refresh".to_string(),
        },
        Msg::Store(m) => match m {
            StoreMsg::HighlightsLoaded {
                document, result, ..
            } => match result {
                Ok(rows) => format!("Store::HighlightsLoaded({}, {} rows)", document, rows.len()),
                Err(_) => format!("Store::HighlightsLoaded({}, error)", document),
            },
            StoreMsg::PlanApplied { document, .. } => format!("Store::PlanApplied({})", document),
            StoreMsg::PlanFailed { .. } => "Store::PlanFailed".to_string(),
        },
    }
}
