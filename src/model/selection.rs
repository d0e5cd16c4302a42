//! Interaction modes and drag-selection state

/// Which operation a drag applies when released.
///
/// Highlight and erase are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Plain reading; drags do nothing
    #[default]
    Reading,
    /// Drags add highlights
    Highlight,
    /// Drags erase highlights
    Erase,
}

impl InteractionMode {
    /// True while either highlight or erase mode is active
    pub fn is_marking(self) -> bool {
        !matches!(self, InteractionMode::Reading)
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Reading => "reading",
            InteractionMode::Highlight => "highlight",
            InteractionMode::Erase => "erase",
        }
    }
}

/// A character span `[start, end)` captured from a word segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// An unordered pair of offsets captured from drag start and end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Order the pair into `[min, max)`
    pub fn normalized(self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open overlap test, assuming the range is normalized
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }
}

/// Drag-selection state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    /// A drag is in progress. The anchor is pinned to the segment where the
    /// drag started; the head follows the pointer.
    Selecting { anchor: Span, head: Span },
}

impl SelectionState {
    pub fn is_selecting(&self) -> bool {
        matches!(self, SelectionState::Selecting { .. })
    }

    /// Begin a drag on a word segment
    pub fn start(span: Span) -> Self {
        SelectionState::Selecting {
            anchor: span,
            head: span,
        }
    }

    /// Move the head; no effect when idle
    pub fn extend_to(&mut self, span: Span) {
        if let SelectionState::Selecting { head, .. } = self {
            *head = span;
        }
    }

    /// The normalized `[min, max)` range covered by the drag so far
    pub fn range(&self) -> Option<SelectionRange> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selecting { anchor, head } => {
                let start = anchor.start.min(head.start);
                let end = anchor.end.max(head.end);
                Some(SelectionRange::new(start, end))
            }
        }
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Idle;
    }
}
