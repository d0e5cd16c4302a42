//! Drag-selection state machine tests

mod common;

use common::{highlight, new_spans, test_model, test_model_with_highlights};
use lectio::commands::Cmd;
use lectio::messages::{Msg, ReaderMsg};
use lectio::model::{InteractionMode, SelectionRange, SelectionState, Span};
use lectio::update::update;

fn send(model: &mut lectio::ReaderModel, msg: ReaderMsg) -> Option<Cmd> {
    update(model, Msg::Reader(msg))
}

/// Pull the plan out of whatever command a pointer-up produced
fn applied_plan(cmd: Option<Cmd>) -> Option<lectio::reconcile::HighlightPlan> {
    match cmd? {
        Cmd::ApplyPlan { plan, .. } => Some(plan),
        Cmd::Batch(cmds) => cmds.into_iter().find_map(|c| match c {
            Cmd::ApplyPlan { plan, .. } => Some(plan),
            _ => None,
        }),
        _ => None,
    }
}

// ========================================================================
// Idle -> Selecting
// ========================================================================

#[test]
fn test_pointer_down_in_reading_mode_is_ignored() {
    let mut model = test_model("The Lord is good");
    assert!(send(&mut model, ReaderMsg::PointerDown { offset: 5 }).is_none());
    assert_eq!(model.selection, SelectionState::Idle);
}

#[test]
fn test_pointer_down_on_word_starts_selection() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));

    let cmd = send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.selection, SelectionState::start(Span::new(4, 8)));
}

#[test]
fn test_pointer_down_on_whitespace_is_ignored() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    assert!(send(&mut model, ReaderMsg::PointerDown { offset: 3 }).is_none());
    assert!(!model.selection.is_selecting());
}

#[test]
fn test_pointer_down_on_punctuation_is_ignored() {
    let mut model = test_model("Taste, and see");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Erase));
    assert!(send(&mut model, ReaderMsg::PointerDown { offset: 5 }).is_none());
    assert!(!model.selection.is_selecting());
}

// ========================================================================
// Selecting -> Selecting
// ========================================================================

#[test]
fn test_pointer_move_updates_head_only() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    send(&mut model, ReaderMsg::PointerMove { offset: 13 });

    assert_eq!(
        model.selection,
        SelectionState::Selecting {
            anchor: Span::new(4, 8),
            head: Span::new(12, 16),
        }
    );
    assert_eq!(model.selection_range(), Some(SelectionRange::new(4, 16)));
}

#[test]
fn test_pointer_move_over_whitespace_keeps_head() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });
    send(&mut model, ReaderMsg::PointerMove { offset: 10 });

    assert!(send(&mut model, ReaderMsg::PointerMove { offset: 11 }).is_none());
    assert_eq!(model.selection_range(), Some(SelectionRange::new(4, 11)));
}

#[test]
fn test_pointer_move_while_idle_is_ignored() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    assert!(send(&mut model, ReaderMsg::PointerMove { offset: 5 }).is_none());
}

#[test]
fn test_backward_drag_normalizes() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 13 });
    send(&mut model, ReaderMsg::PointerMove { offset: 0 });

    assert_eq!(model.selection_range(), Some(SelectionRange::new(0, 16)));
}

// ========================================================================
// Selecting -> Idle
// ========================================================================

#[test]
fn test_pointer_up_in_highlight_mode_plans_add() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 4 });
    send(&mut model, ReaderMsg::PointerMove { offset: 9 });

    let plan = applied_plan(send(&mut model, ReaderMsg::PointerUp)).expect("expected a plan");

    assert_eq!(
        new_spans(&plan.insertions),
        vec![
            (4, 8, "Lord".to_string()),
            (9, 11, "is".to_string())
        ]
    );
    assert_eq!(model.selection, SelectionState::Idle);
    // Highlights are not touched until the refetch lands
    assert!(model.highlights.is_empty());
}

#[test]
fn test_pointer_up_in_erase_mode_plans_erase() {
    let text = "The Lord is good";
    let original = highlight(text, 4, 16);
    let mut model = test_model_with_highlights(text, vec![original.clone()]);
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Erase));
    send(&mut model, ReaderMsg::PointerDown { offset: 9 });
    send(&mut model, ReaderMsg::PointerMove { offset: 13 });

    let plan = applied_plan(send(&mut model, ReaderMsg::PointerUp)).expect("expected a plan");

    assert_eq!(plan.deletions, vec![original.id]);
    assert_eq!(new_spans(&plan.insertions), vec![(4, 8, "Lord".to_string())]);
}

#[test]
fn test_erase_over_unhighlighted_text_is_noop() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Erase));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    let cmd = send(&mut model, ReaderMsg::PointerUp);

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(applied_plan(cmd).is_none());
    assert_eq!(model.selection, SelectionState::Idle);
}

#[test]
fn test_pointer_up_while_idle_is_ignored() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    assert!(send(&mut model, ReaderMsg::PointerUp).is_none());
}

#[test]
fn test_pointer_cancel_drops_selection() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    assert_eq!(send(&mut model, ReaderMsg::PointerCancel), Some(Cmd::Redraw));
    assert_eq!(model.selection, SelectionState::Idle);
    assert!(send(&mut model, ReaderMsg::PointerUp).is_none());
}

// ========================================================================
// Modes
// ========================================================================

#[test]
fn test_modes_are_mutually_exclusive() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::ToggleHighlightMode);
    assert_eq!(model.mode, InteractionMode::Highlight);
    send(&mut model, ReaderMsg::ToggleEraseMode);
    assert_eq!(model.mode, InteractionMode::Erase);
    send(&mut model, ReaderMsg::ToggleEraseMode);
    assert_eq!(model.mode, InteractionMode::Reading);
}

#[test]
fn test_switching_mode_mid_drag_clears_selection() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    let cmd = send(&mut model, ReaderMsg::SetMode(InteractionMode::Erase));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.selection, SelectionState::Idle);
}

#[test]
fn test_exit_modes_clears_native_selection() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    send(&mut model, ReaderMsg::PointerDown { offset: 5 });

    let cmd = send(&mut model, ReaderMsg::ExitModes);

    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::ClearNativeSelection]))
    );
    assert_eq!(model.mode, InteractionMode::Reading);
    assert_eq!(model.selection, SelectionState::Idle);
}

#[test]
fn test_setting_same_mode_is_noop() {
    let mut model = test_model("The Lord is good");
    send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight));
    assert!(send(&mut model, ReaderMsg::SetMode(InteractionMode::Highlight)).is_none());
    assert!(send(&mut model, ReaderMsg::ExitModes).is_some());
    assert!(send(&mut model, ReaderMsg::ExitModes).is_none());
}
