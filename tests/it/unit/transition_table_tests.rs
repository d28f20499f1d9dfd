//! Snapshot of the full dispatch decision table.
//!
//! To update after an intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use boardinput::input::{Action, Phase, Policy, Trigger, render_transition_table, transition};
use boardinput::types::{Origin, Stage};

#[test]
fn snapshot_default_policy_table() {
    let table = render_transition_table(Policy {
        view_only: false,
        drawing_enabled: true,
    });
    insta::assert_snapshot!(table, @r"
    Idle           start board  default   -> StartDrag
    Idle           start board  alternate -> StartDraw
    Idle           start pocket default   -> StartPocketDrag
    Idle           start pocket alternate -> StartDraw
    Dragging       start board  default   -> CancelDrag
    Dragging       start board  alternate -> CancelDrag
    Dragging       start pocket default   -> CancelDrag
    Dragging       start pocket alternate -> CancelDrag
    Drawing        start board  default   -> CancelDraw
    Drawing        start board  alternate -> CancelDraw
    Drawing        start pocket default   -> CancelDraw
    Drawing        start pocket alternate -> CancelDraw
    PocketDragging start board  default   -> CancelDrag
    PocketDragging start board  alternate -> CancelDrag
    PocketDragging start pocket default   -> CancelDrag
    PocketDragging start pocket alternate -> CancelDrag
    Idle           move  -      -         -> MoveDrag
    Idle           end   -      -         -> EndDrag
    Dragging       move  -      -         -> MoveDrag
    Dragging       end   -      -         -> EndDrag
    Drawing        move  -      -         -> MoveDraw
    Drawing        end   -      -         -> EndDraw
    PocketDragging move  -      -         -> MoveDrag
    PocketDragging end   -      -         -> EndDrag
    ");
}

#[test]
fn test_view_only_table_never_starts() {
    let policy = Policy {
        view_only: true,
        drawing_enabled: true,
    };
    for phase in Phase::ALL {
        for origin in [Origin::Board, Origin::Pocket] {
            for alternate in [false, true] {
                let trigger = Trigger {
                    stage: Stage::Start,
                    alternate,
                    origin,
                };
                assert!(!transition(phase, policy, trigger).starts_gesture());
            }
        }
    }
}

#[test]
fn test_view_only_still_cancels() {
    let policy = Policy {
        view_only: true,
        drawing_enabled: true,
    };
    let trigger = Trigger {
        stage: Stage::Start,
        alternate: false,
        origin: Origin::Board,
    };
    assert_eq!(transition(Phase::Dragging, policy, trigger), Action::CancelDrag);
    assert_eq!(transition(Phase::Drawing, policy, trigger), Action::CancelDraw);
}

#[test]
fn test_drawing_disabled_table() {
    let policy = Policy {
        view_only: false,
        drawing_enabled: false,
    };
    let table = render_transition_table(policy);

    assert!(!table.contains("StartDraw"));
    assert!(!table.contains("MoveDraw"));
    assert!(table.contains("Drawing        move  -      -         -> Ignore"));
    assert!(table.contains("Idle           start board  alternate -> Ignore"));
}
