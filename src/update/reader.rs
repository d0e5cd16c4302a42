//! Drag-selection state machine
//!
//! `Idle -> Selecting` on pointer-down over a word while a marking mode is
//! active, `Selecting -> Selecting` on pointer-move over a word (head only),
//! `Selecting -> Idle` on pointer-up, which applies the add or erase.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::ReaderMsg;
use crate::model::{InteractionMode, ReaderModel, SelectionRange, SelectionState, Span};
use crate::reconcile::{plan_add, plan_erase};

/// Handle pointer/touch and mode messages
pub fn update_reader(model: &mut ReaderModel, msg: ReaderMsg) -> Option<Cmd> {
    match msg {
        ReaderMsg::PointerDown { offset } => {
            if !model.mode.is_marking() {
                return None;
            }
            let span = word_span_at(model, offset)?;
            model.selection = SelectionState::start(span);
            Some(Cmd::Redraw)
        }

        ReaderMsg::PointerMove { offset } => {
            let SelectionState::Selecting { head, .. } = model.selection else {
                return None;
            };
            let span = word_span_at(model, offset)?;
            if span == head {
                return None;
            }
            model.selection.extend_to(span);
            Some(Cmd::Redraw)
        }

        ReaderMsg::PointerUp => {
            let range = model.selection.range()?;
            model.selection.clear();
            let apply = finish_selection(model, range);
            Some(Cmd::batch([Cmd::Redraw, apply]))
        }

        ReaderMsg::PointerCancel => {
            if !model.selection.is_selecting() {
                return None;
            }
            model.selection.clear();
            Some(Cmd::Redraw)
        }

        ReaderMsg::SetMode(mode) => set_mode(model, mode),

        ReaderMsg::ToggleHighlightMode => {
            let mode = if model.mode == InteractionMode::Highlight {
                InteractionMode::Reading
            } else {
                InteractionMode::Highlight
            };
            set_mode(model, mode)
        }

        ReaderMsg::ToggleEraseMode => {
            let mode = if model.mode == InteractionMode::Erase {
                InteractionMode::Reading
            } else {
                InteractionMode::Erase
            };
            set_mode(model, mode)
        }

        ReaderMsg::ExitModes => set_mode(model, InteractionMode::Reading),
    }
}

fn word_span_at(model: &ReaderModel, offset: usize) -> Option<Span> {
    model
        .document
        .word_at(offset)
        .map(|seg| Span::new(seg.start_offset, seg.end_offset))
}

/// Switching modes always abandons an in-progress drag
fn set_mode(model: &mut ReaderModel, mode: InteractionMode) -> Option<Cmd> {
    if model.mode == mode && !model.selection.is_selecting() {
        return None;
    }
    debug!(from = model.mode.label(), to = mode.label(), "mode changed");
    model.mode = mode;
    model.selection.clear();

    if mode.is_marking() {
        Some(Cmd::Redraw)
    } else {
        Some(Cmd::batch([Cmd::Redraw, Cmd::ClearNativeSelection]))
    }
}

/// Turn a released drag into an add or erase plan
fn finish_selection(model: &ReaderModel, range: SelectionRange) -> Cmd {
    let range = range.normalized();
    if range.is_empty() || model.document.slice(range.start, range.end).trim().is_empty() {
        debug!(start = range.start, end = range.end, "discarding empty selection");
        return Cmd::None;
    }

    let user = model.user_id();
    let document = model.document_id();
    let plan = match model.mode {
        InteractionMode::Highlight => plan_add(
            range,
            model.document.segments(),
            &model.highlights,
            user,
            document,
            model.add_policy,
        ),
        InteractionMode::Erase => plan_erase(
            range,
            model.document.text(),
            &model.highlights,
            user,
            document,
        ),
        InteractionMode::Reading => return Cmd::None,
    };

    if plan.is_empty() {
        debug!(start = range.start, end = range.end, "nothing to reconcile");
        return Cmd::None;
    }

    debug!(
        mode = model.mode.label(),
        start = range.start,
        end = range.end,
        plan = %plan.summary(),
        "reconciled selection"
    );

    Cmd::ApplyPlan {
        user: user.clone(),
        document: document.clone(),
        plan,
    }
}
