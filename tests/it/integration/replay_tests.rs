//! Trace replay tests.

use boardinput::input::Phase;
use boardinput::replay::{Replay, load_trace, parse_trace};
use boardinput::types::{EventName, Target};
use boardinput::{InputError, InteractionConfig};
use std::fs;
use tempfile::tempdir;

const DRAG_THEN_SCROLL: &str = r#"[
    { "target": "root", "event": "mousedown", "x": 10, "y": 10, "button": "primary" },
    { "target": "document", "event": "mousemove", "x": 60, "y": 10 },
    { "target": "document", "event": "mouseup", "x": 60, "y": 10, "button": "primary" },
    { "target": "document", "event": "scroll" },
    { "target": "root", "event": "mousedown", "x": 10, "y": 10, "shift": true },
    { "target": "wrap", "event": "resize" }
]"#;

#[test]
fn test_replay_reports_phase_per_step() {
    let steps = parse_trace(DRAG_THEN_SCROLL).unwrap();
    let replay = Replay::new(InteractionConfig::default(), true);
    let outcomes = replay.run(&steps).unwrap();

    let phases: Vec<Phase> = outcomes.iter().map(|o| o.phase).collect();
    assert_eq!(
        phases,
        vec![
            Phase::Dragging,
            Phase::Dragging,
            Phase::Idle,
            Phase::Idle,
            Phase::Drawing,
            Phase::Drawing,
        ]
    );
    assert!(outcomes[0].default_prevented);
    assert!(!outcomes[3].bounds_cached);
    assert!(outcomes[4].bounds_cached);
    assert_eq!(outcomes[5].delivered, 1);
    assert!(!outcomes[5].bounds_cached);
}

#[test]
fn test_replay_without_size_observer_ignores_native_resize() {
    let steps = parse_trace(r#"[{ "target": "wrap", "event": "resize" }]"#).unwrap();
    let replay = Replay::new(InteractionConfig::default(), false);

    let outcome = replay.step(0, &steps[0]).unwrap();
    assert_eq!(outcome.delivered, 0);
    assert_eq!(outcome.target, Target::Wrap);
    assert_eq!(outcome.event, EventName::Resize);
}

#[test]
fn test_pocket_target_in_trace() {
    let config = InteractionConfig::from_json_str(r#"{ "pockets": { "top": true } }"#).unwrap();
    let steps = parse_trace(
        r#"[{ "target": { "pocket": "top" }, "event": "touchstart", "x": 4, "y": 4 }]"#,
    )
    .unwrap();
    let replay = Replay::new(config, true);

    let outcomes = replay.run(&steps).unwrap();
    assert_eq!(outcomes[0].phase, Phase::PocketDragging);
}

#[test]
fn test_touch_points_on_mouse_event_rejected() {
    let steps = parse_trace(
        r#"[{ "target": "root", "event": "mousedown", "touches": [{ "x": 1, "y": 1 }] }]"#,
    )
    .unwrap();
    let replay = Replay::new(InteractionConfig::default(), true);

    let err = replay.run(&steps).unwrap_err();
    assert!(matches!(err, InputError::InvalidTrace { index: 0, .. }));
    assert!(replay.widget().state().is_idle());
}

#[test]
fn test_pointer_fields_on_non_pointer_events_rejected() {
    let steps = parse_trace(
        r#"[
            { "target": "document", "event": "scroll", "button": "primary" },
            { "target": "document", "event": "scroll", "buttons": 1 },
            { "target": "document", "event": "scroll", "shift": true },
            { "target": "window", "event": "resize", "touches": [] }
        ]"#,
    )
    .unwrap();

    for (index, step) in steps.iter().enumerate() {
        let err = step.to_input(index).unwrap_err();
        assert!(
            matches!(err, InputError::InvalidTrace { index: i, .. } if i == index),
            "step {index} was accepted"
        );
    }
}

#[test]
fn test_empty_touch_end_step_drops_at_last_move() {
    let steps = parse_trace(
        r#"[{ "target": "document", "event": "touchend", "x": 1, "y": 2, "touches": [] }]"#,
    )
    .unwrap();

    let input = steps[0].to_input(0).unwrap().unwrap();
    assert_eq!(input.position, None);
}

#[test]
fn test_outcome_display() {
    let steps = parse_trace(DRAG_THEN_SCROLL).unwrap();
    let replay = Replay::new(InteractionConfig::default(), true);
    let outcome = replay.step(0, &steps[0]).unwrap();

    let line = outcome.to_string();
    assert!(line.starts_with("#0"));
    assert!(line.contains("mousedown"));
    assert!(line.contains("-> Dragging"));
    assert!(line.contains("prevented"));
}

#[test]
fn test_load_trace_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.json");
    fs::write(&path, DRAG_THEN_SCROLL).unwrap();

    assert_eq!(load_trace(&path).unwrap().len(), 6);
}
