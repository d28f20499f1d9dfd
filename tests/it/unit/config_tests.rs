//! Unit tests for config module.

use boardinput::types::{PocketSide, Target};
use boardinput::{InputError, InteractionConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    fs::write(
        &path,
        r#"{
            "viewOnly": false,
            "drawable": { "enabled": false },
            "disableContextMenu": true,
            "pockets": { "bottom": true }
        }"#,
    )
    .unwrap();

    let config = InteractionConfig::load(&path).unwrap();
    assert!(!config.drawable.enabled);
    assert!(config.disable_context_menu);
    assert_eq!(config.pockets.sides(), vec![PocketSide::Bottom]);
    assert!(config.initial_state().suppresses_context_menu());
}

#[test]
fn test_initial_state_reflects_policy() {
    let config = InteractionConfig::from_json_str(r#"{ "viewOnly": true }"#).unwrap();
    let state = config.initial_state();

    assert!(state.view_only());
    assert!(state.drawing_enabled());
    assert!(state.is_idle());
}

#[test]
fn test_context_menu_kept_without_drawing_or_flag() {
    let config =
        InteractionConfig::from_json_str(r#"{ "drawable": { "enabled": false } }"#).unwrap();
    assert!(!config.initial_state().suppresses_context_menu());
}

#[test]
fn test_observe_document_body() {
    let config = InteractionConfig::from_json_str(r#"{ "observeDocumentBody": true }"#).unwrap();
    assert_eq!(config.observation_target(), Target::Body);
}

#[test]
fn test_invalid_json_is_reported() {
    let err = InteractionConfig::from_json_str("{ viewOnly: yes }").unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = InteractionConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}
