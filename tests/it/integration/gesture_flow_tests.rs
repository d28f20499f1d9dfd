//! End-to-end gesture flows through host events.

use crate::helpers::{TestWidgetBuilder, at, left_down, mouse_move, mouse_up, right_down, shift_down, touch_at};
use boardinput::host::EventHub;
use boardinput::input::Phase;
use boardinput::types::{EventName, InputEvent, PocketSide, Target};

#[test]
fn test_drag_across_board_and_release_outside() {
    let bound = TestWidgetBuilder::new().bind(EventHub::new());
    let hub = &bound.hub;

    let down = hub.dispatch(Target::Root, EventName::MouseDown, Some(left_down(10.0, 10.0)));
    assert!(down.default_prevented);
    assert_eq!(bound.widget.phase(), Phase::Dragging);

    // Moves over the board bubble up to the document listener.
    hub.dispatch(Target::Root, EventName::MouseMove, Some(mouse_move(50.0, 10.0)));
    // The release happens outside the widget.
    hub.dispatch(Target::Document, EventName::MouseUp, Some(mouse_up(900.0, 10.0)));

    assert!(bound.widget.state().is_idle());
    assert_eq!(bound.log.calls(), vec!["drag.start", "drag.move", "drag.end"]);
    assert_eq!(bound.log.drops(), vec![at(900.0, 10.0)]);
}

#[test]
fn test_secondary_button_draws() {
    let bound = TestWidgetBuilder::new().bind(EventHub::new());
    let hub = &bound.hub;

    hub.dispatch(Target::Root, EventName::MouseDown, Some(right_down(0.0, 0.0)));
    assert_eq!(bound.widget.phase(), Phase::Drawing);
    hub.dispatch(Target::Document, EventName::MouseMove, Some(mouse_move(3.0, 4.0)));
    hub.dispatch(Target::Document, EventName::MouseUp, Some(mouse_up(3.0, 4.0)));

    assert!(bound.widget.state().is_idle());
    assert_eq!(bound.log.calls(), vec!["draw.start", "draw.move", "draw.end"]);
}

#[test]
fn test_touch_drag_from_pocket() {
    let bound = TestWidgetBuilder::new().with_pockets().bind(EventHub::new());
    let hub = &bound.hub;
    let bottom = Target::Pocket(PocketSide::Bottom);

    let start = hub.dispatch(bottom, EventName::TouchStart, Some(touch_at(5.0, 500.0)));
    assert!(start.default_prevented);
    assert_eq!(bound.widget.phase(), Phase::PocketDragging);

    hub.dispatch(Target::Document, EventName::TouchMove, Some(touch_at(5.0, 300.0)));
    let drag = *bound.widget.state().gesture().drag().unwrap();
    assert_eq!(drag.origin, at(5.0, 500.0));
    assert_eq!(drag.current, at(5.0, 300.0));

    hub.dispatch(Target::Document, EventName::TouchEnd, Some(InputEvent::touch(Vec::new())));
    assert!(bound.widget.state().is_idle());
    assert_eq!(bound.log.calls(), vec!["pocket.drag", "drag.move", "drag.end"]);
}

#[test]
fn test_touch_drop_lands_on_last_touch_point() {
    let bound = TestWidgetBuilder::new().bind(EventHub::new());
    let hub = &bound.hub;

    hub.dispatch(Target::Root, EventName::TouchStart, Some(touch_at(5.0, 5.0)));
    hub.dispatch(Target::Document, EventName::TouchMove, Some(touch_at(100.0, 100.0)));
    hub.dispatch(Target::Document, EventName::TouchEnd, Some(InputEvent::touch(Vec::new())));

    assert!(bound.widget.state().is_idle());
    assert_eq!(bound.log.drops(), vec![at(100.0, 100.0)]);
}

#[test]
fn test_second_finger_cancels_drag() {
    let bound = TestWidgetBuilder::new().bind(EventHub::new());
    let hub = &bound.hub;

    hub.dispatch(Target::Root, EventName::TouchStart, Some(touch_at(1.0, 1.0)));
    let second = InputEvent::touch(vec![at(1.0, 1.0), at(80.0, 80.0)]);
    let report = hub.dispatch(Target::Root, EventName::TouchStart, Some(second));

    assert!(report.default_prevented);
    assert!(bound.widget.state().is_idle());
    assert_eq!(bound.log.calls(), vec!["drag.start", "drag.cancel"]);
}

#[test]
fn test_ignored_start_keeps_default_behaviour() {
    let bound = TestWidgetBuilder::new().without_drawing().bind(EventHub::new());

    let report = bound
        .hub
        .dispatch(Target::Root, EventName::MouseDown, Some(shift_down(1.0, 1.0)));
    assert_eq!(report.delivered, 1);
    assert!(!report.default_prevented);
    assert!(bound.widget.state().is_idle());
}

#[test]
fn test_non_pointer_events_do_not_dispatch() {
    let bound = TestWidgetBuilder::new().bind(EventHub::new());

    // A start listener receiving an event without pointer data does nothing.
    bound.hub.dispatch(Target::Root, EventName::MouseDown, None);
    assert!(bound.widget.state().is_idle());
    assert!(bound.log.calls().is_empty());
}

#[test]
fn test_at_most_one_gesture_through_a_long_session() {
    let bound = TestWidgetBuilder::new().with_pockets().bind(EventHub::new());
    let hub = &bound.hub;
    let top = Target::Pocket(PocketSide::Top);

    let steps: Vec<(Target, EventName, InputEvent)> = vec![
        (Target::Root, EventName::MouseDown, left_down(1.0, 1.0)),
        (top, EventName::MouseDown, left_down(1.0, 1.0)),
        (top, EventName::MouseDown, left_down(1.0, 1.0)),
        (Target::Root, EventName::MouseDown, shift_down(1.0, 1.0)),
        (Target::Document, EventName::MouseMove, mouse_move(2.0, 2.0)),
        (top, EventName::TouchStart, touch_at(1.0, 1.0)),
        (Target::Document, EventName::MouseUp, mouse_up(2.0, 2.0)),
        (Target::Root, EventName::MouseDown, right_down(1.0, 1.0)),
        (Target::Root, EventName::MouseDown, left_down(1.0, 1.0)),
    ];
    let expected = [
        Phase::Dragging,
        Phase::Idle,
        Phase::PocketDragging,
        Phase::Idle,
        Phase::Idle,
        Phase::PocketDragging,
        Phase::Idle,
        Phase::Drawing,
        Phase::Idle,
    ];

    for ((target, name, event), phase) in steps.into_iter().zip(expected) {
        hub.dispatch(target, name, Some(event));
        assert_eq!(bound.widget.phase(), phase, "after {name} on {target:?}");
    }
}
