//! Store result handlers
//!
//! The model never mutates highlights optimistically. A successful batch
//! triggers a refetch; the rows shown until it lands are stale.

use tracing::{debug, error, warn};

use crate::commands::Cmd;
use crate::messages::StoreMsg;
use crate::model::ReaderModel;

/// Handle results reported by the runtime
pub fn update_store(model: &mut ReaderModel, msg: StoreMsg) -> Option<Cmd> {
    match msg {
        StoreMsg::HighlightsLoaded {
            user,
            document,
            result,
        } => {
            if &user != model.user_id() || &document != model.document_id() {
                debug!(%document, "ignoring highlights for a document that is no longer open");
                return None;
            }
            match result {
                Ok(rows) => {
                    debug!(%document, rows = rows.len(), "highlights loaded");
                    model.highlights = rows;
                }
                Err(e) => {
                    error!(%document, "Failed to load highlights: {}", e);
                    model.highlights.clear();
                }
            }
            model.highlights_loaded = true;
            Some(Cmd::Redraw)
        }

        StoreMsg::PlanApplied {
            document,
            deleted,
            inserted,
        } => {
            debug!(%document, deleted, inserted, "plan applied");
            if &document != model.document_id() {
                return None;
            }
            model.set_status(format!(
                "Updated highlights: {} removed, {} added",
                deleted, inserted
            ));
            Some(Cmd::FetchHighlights {
                user: model.user_id().clone(),
                document,
                force: false,
            })
        }

        StoreMsg::PlanFailed { message } => {
            warn!("Failed to update highlights: {}", message);
            model.set_error(format!("Failed to update highlights: {}", message));
            Some(Cmd::Redraw)
        }
    }
}
