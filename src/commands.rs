//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{DocumentId, UserId};
use crate::reconcile::HighlightPlan;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the text
    Redraw,
    /// Load highlights for (user, document) through the query cache.
    /// `force` skips any cached entry and goes to the store.
    FetchHighlights {
        user: UserId,
        document: DocumentId,
        force: bool,
    },
    /// Apply a reconciliation plan: batch delete, then batch insert
    ApplyPlan {
        user: UserId,
        document: DocumentId,
        plan: HighlightPlan,
    },
    /// Drop any native text selection left behind by a drag
    ClearNativeSelection,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, flattening `None`
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::FetchHighlights { .. } | Cmd::ApplyPlan { .. } => false,
            Cmd::Redraw | Cmd::ClearNativeSelection => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
