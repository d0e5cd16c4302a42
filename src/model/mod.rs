//! Reader model - the complete state of the highlighting engine
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod highlight;
pub mod selection;
pub mod session;
pub mod status;

pub use document::Document;
pub use highlight::{DocumentId, Highlight, HighlightId, NewHighlight, UserId};
pub use selection::{InteractionMode, SelectionRange, SelectionState, Span};
pub use session::Session;
pub use status::{StatusKind, TransientMessage};

use crate::config::AppConfig;
use crate::reconcile::AddPolicy;

/// The complete reader model
#[derive(Debug, Clone)]
pub struct ReaderModel {
    /// Who is reading; scopes every highlight query and mutation
    pub session: Session,
    /// The text being read
    pub document: Document,
    /// Persisted highlights for (session user, document), as last fetched.
    /// Never mutated locally; replaced wholesale on refetch.
    pub highlights: Vec<Highlight>,
    /// Whether `highlights` reflects a completed fetch
    pub highlights_loaded: bool,
    /// Active interaction mode
    pub mode: InteractionMode,
    /// In-progress drag selection
    pub selection: SelectionState,
    /// How add operations treat words that are already highlighted
    pub add_policy: AddPolicy,
    /// Last status message (errors from failed operations land here)
    pub status: Option<TransientMessage>,
}

impl ReaderModel {
    pub fn new(session: Session, document: Document) -> Self {
        Self {
            session,
            document,
            highlights: Vec::new(),
            highlights_loaded: false,
            mode: InteractionMode::default(),
            selection: SelectionState::default(),
            add_policy: AddPolicy::default(),
            status: None,
        }
    }

    /// Build a model using the configured session and add policy
    pub fn from_config(config: &AppConfig, document: Document) -> Self {
        let mut model = Self::new(config.session(), document);
        model.add_policy = config.add_policy;
        model
    }

    pub fn user_id(&self) -> &UserId {
        &self.session.user_id
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document.id
    }

    /// Set a transient error message
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(TransientMessage::error(text));
    }

    /// Set a transient informational message
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(TransientMessage::info(text));
    }

    /// Drop the status message once it has expired
    pub fn clear_expired_status(&mut self) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }
    }

    /// The normalized range of the in-progress drag, if any
    pub fn selection_range(&self) -> Option<SelectionRange> {
        self.selection.range()
    }
}
