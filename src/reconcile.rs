//! Highlight reconciliation
//!
//! Converts a normalized add or erase range into the concrete batches of
//! row deletions and insertions to send to the highlight store. Rows are
//! never edited in place: erasing deletes the original and inserts the
//! surviving fragments.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentId, Highlight, HighlightId, NewHighlight, SelectionRange, UserId};
use crate::util::text::{char_slice, trimmed_span, Segment};

/// How an add treats words that already carry a highlight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddPolicy {
    /// Insert one row per covered word, even if it duplicates an existing row
    #[default]
    Append,
    /// Skip words already fully covered by an existing highlight
    SkipCovered,
}

/// The batches produced by one add or erase operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightPlan {
    /// Ids to delete, issued as one batch before any insert
    pub deletions: Vec<HighlightId>,
    /// Rows to insert, issued as one batch
    pub insertions: Vec<NewHighlight>,
}

impl HighlightPlan {
    /// A plan with nothing to do requires no remote call
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} deletion{}, {} insertion{}",
            self.deletions.len(),
            if self.deletions.len() == 1 { "" } else { "s" },
            self.insertions.len(),
            if self.insertions.len() == 1 { "" } else { "s" },
        )
    }
}

/// Plan a highlight-add over `range`.
///
/// Emits one row per word segment overlapping `range`, covering exactly that
/// segment. Non-word segments are never highlighted.
pub fn plan_add(
    range: SelectionRange,
    segments: &[Segment],
    existing: &[Highlight],
    user: &UserId,
    document: &DocumentId,
    policy: AddPolicy,
) -> HighlightPlan {
    let range = range.normalized();
    if range.is_empty() {
        return HighlightPlan::default();
    }

    let insertions = segments
        .iter()
        .filter(|seg| seg.is_word && seg.overlaps(range.start, range.end))
        .filter(|seg| match policy {
            AddPolicy::Append => true,
            AddPolicy::SkipCovered => !existing
                .iter()
                .any(|h| h.covers(seg.start_offset, seg.end_offset)),
        })
        .map(|seg| NewHighlight {
            user_id: user.clone(),
            document_id: document.clone(),
            start_offset: seg.start_offset,
            end_offset: seg.end_offset,
            highlighted_text: seg.content.clone(),
        })
        .collect();

    HighlightPlan {
        deletions: Vec::new(),
        insertions,
    }
}

/// Plan a highlight-erase over `range`.
///
/// Every highlight overlapping `range` is deleted. The parts of it left of
/// and right of `range` are re-inserted as new rows, trimmed of surrounding
/// whitespace; fragments that trim to nothing are dropped.
pub fn plan_erase(
    range: SelectionRange,
    text: &str,
    existing: &[Highlight],
    user: &UserId,
    document: &DocumentId,
) -> HighlightPlan {
    let range = range.normalized();
    let mut plan = HighlightPlan::default();
    if range.is_empty() {
        return plan;
    }

    for h in existing.iter().filter(|h| h.overlaps(range.start, range.end)) {
        plan.deletions.push(h.id);

        if h.start_offset < range.start {
            let end = h.end_offset.min(range.start);
            if let Some(row) = fragment(text, h.start_offset, end, user, document) {
                plan.insertions.push(row);
            }
        }

        if h.end_offset > range.end {
            let start = h.start_offset.max(range.end);
            if let Some(row) = fragment(text, start, h.end_offset, user, document) {
                plan.insertions.push(row);
            }
        }
    }

    plan
}

fn fragment(
    text: &str,
    start: usize,
    end: usize,
    user: &UserId,
    document: &DocumentId,
) -> Option<NewHighlight> {
    let (start, end) = trimmed_span(text, start, end)?;
    Some(NewHighlight {
        user_id: user.clone(),
        document_id: document.clone(),
        start_offset: start,
        end_offset: end,
        highlighted_text: char_slice(text, start, end).to_string(),
    })
}
