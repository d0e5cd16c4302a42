//! Document message handlers (open, text changes, refresh)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{Document, ReaderModel};

/// Handle document messages
pub fn update_document(model: &mut ReaderModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Open { id, text } => {
            tracing::info!(document = %id, "opening document");
            model.document = Document::new(id, text);
            model.highlights.clear();
            model.highlights_loaded = false;
            model.selection.clear();
            Some(Cmd::batch([Cmd::Redraw, fetch(model, false)]))
        }

        DocumentMsg::SetText(text) => {
            model.document.set_text(text);
            model.selection.clear();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Refresh => Some(fetch(model, true)),
    }
}

fn fetch(model: &ReaderModel, force: bool) -> Cmd {
    Cmd::FetchHighlights {
        user: model.user_id().clone(),
        document: model.document_id().clone(),
        force,
    }
}
