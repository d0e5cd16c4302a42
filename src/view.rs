//! Segment view states
//!
//! Maps each segment to the three booleans a renderer styles by. Nothing
//! here is persisted.

use crate::model::{Highlight, InteractionMode, ReaderModel, SelectionRange};
use crate::util::text::Segment;

/// Visual state of one segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentState {
    /// Overlaps a persisted highlight
    pub highlighted: bool,
    /// Would be highlighted if the current drag were released
    pub add_preview: bool,
    /// Belongs to a highlight the current drag would erase
    pub erase_preview: bool,
}

/// Compute per-segment states from persisted and in-progress state
pub fn segment_states(
    segments: &[Segment],
    highlights: &[Highlight],
    selection: Option<SelectionRange>,
    mode: InteractionMode,
) -> Vec<SegmentState> {
    let selection = selection.map(SelectionRange::normalized);

    // Highlights the current erase drag touches
    let erasing: Vec<&Highlight> = match (mode, selection) {
        (InteractionMode::Erase, Some(range)) => highlights
            .iter()
            .filter(|h| h.overlaps(range.start, range.end))
            .collect(),
        _ => Vec::new(),
    };

    segments
        .iter()
        .map(|seg| {
            let (start, end) = (seg.start_offset, seg.end_offset);
            SegmentState {
                highlighted: highlights.iter().any(|h| h.overlaps(start, end)),
                add_preview: mode == InteractionMode::Highlight
                    && selection.is_some_and(|r| r.overlaps(start, end)),
                erase_preview: erasing.iter().any(|h| h.overlaps(start, end)),
            }
        })
        .collect()
}

/// Segment states for the model's current document and drag
pub fn model_states(model: &ReaderModel) -> Vec<SegmentState> {
    segment_states(
        model.document.segments(),
        &model.highlights,
        model.selection_range(),
        model.mode,
    )
}

/// Plain-text rendering with highlighted runs wrapped in `[` and `]`
pub fn render_marked(segments: &[Segment], states: &[SegmentState]) -> String {
    let mut out = String::new();
    let mut open = false;

    for (seg, state) in segments.iter().zip(states) {
        if state.highlighted && !open {
            out.push('[');
            open = true;
        } else if !state.highlighted && open {
            out.push(']');
            open = false;
        }
        out.push_str(&seg.content);
    }
    if open {
        out.push(']');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, HighlightId, NewHighlight, UserId};
    use crate::util::text::tokenize;

    fn highlight(start: usize, end: usize) -> Highlight {
        NewHighlight {
            user_id: UserId::new("u"),
            document_id: DocumentId::new("d"),
            start_offset: start,
            end_offset: end,
            highlighted_text: String::new(),
        }
        .into_highlight(HighlightId::generate())
    }

    #[test]
    fn test_permanent_highlight() {
        let segments = tokenize("The Lord is good");
        let states = segment_states(&segments, &[highlight(4, 8)], None, InteractionMode::Reading);
        let lit: Vec<bool> = states.iter().map(|s| s.highlighted).collect();
        assert_eq!(lit, vec![false, false, true, false, false, false, false]);
    }

    #[test]
    fn test_add_preview_only_in_highlight_mode() {
        let segments = tokenize("The Lord is");
        let range = Some(SelectionRange::new(4, 11));
        let states = segment_states(&segments, &[], range, InteractionMode::Highlight);
        assert!(states[2].add_preview);
        assert!(states[4].add_preview);
        assert!(!states[0].add_preview);

        let states = segment_states(&segments, &[], range, InteractionMode::Erase);
        assert!(states.iter().all(|s| !s.add_preview));
    }

    #[test]
    fn test_erase_preview_covers_whole_touched_highlight() {
        let segments = tokenize("The Lord is good");
        // Highlight spans "Lord is"; the drag only touches "is"
        let states = segment_states(
            &segments,
            &[highlight(4, 11), highlight(12, 16)],
            Some(SelectionRange::new(9, 11)),
            InteractionMode::Erase,
        );
        assert!(states[2].erase_preview);
        assert!(states[4].erase_preview);
        assert!(!states[6].erase_preview);
    }

    #[test]
    fn test_render_marked() {
        let segments = tokenize("The Lord is good");
        let states = segment_states(
            &segments,
            &[highlight(4, 11), highlight(12, 16)],
            None,
            InteractionMode::Reading,
        );
        assert_eq!(render_marked(&segments, &states), "The [Lord is] [good]");
    }
}
