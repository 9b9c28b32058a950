//! Core Integration Tests
//!
//! Settings persistence and the CorePlugin startup path:
//! - JSON round-trips through a real file
//! - Missing, malformed and invalid files fall back to defaults
//! - Loaded settings reach the game plugin

use bevy::prelude::*;
use checkers3d::core::settings_persistence::{load_or_default, load_settings, save_settings};
use checkers3d::core::{CoreError, CorePlugin, GameSettings};
use checkers3d::game::resources::GameBoard;
use checkers3d::game::rules::{BoardLayout, Side};
use checkers3d::game::CheckersPlugin;
use std::fs;

fn custom_settings() -> GameSettings {
    let mut settings = GameSettings::default();
    settings.board = BoardLayout {
        width: 10,
        height: 10,
        seed_rows: 4,
    };
    settings.mesh_classes.move_preview = 9;
    settings.cell_spacing = 1.0;
    settings
}

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    save_settings(&path, &custom_settings()).unwrap();
    let loaded = load_settings(&path).unwrap();

    assert_eq!(loaded, custom_settings());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "cell_spacing": 2.5 }"#).unwrap();

    let loaded = load_settings(&path).unwrap();

    assert_eq!(loaded.cell_spacing, 2.5);
    assert_eq!(loaded.board, BoardLayout::default());
    assert_eq!(loaded.mesh_classes, GameSettings::default().mesh_classes);
}

#[test]
fn test_invalid_settings_rejected_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = GameSettings::default();
    settings.mesh_classes.side_b = settings.mesh_classes.side_a;

    let result = save_settings(&path, &settings);

    assert!(matches!(result, Err(CoreError::InvalidSettings { .. })));
    assert!(!path.exists(), "Nothing should be written for invalid settings");
}

#[test]
fn test_load_or_default_fallbacks() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert_eq!(load_or_default(&missing), GameSettings::default());

    let malformed = dir.path().join("malformed.json");
    fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        load_settings(&malformed),
        Err(CoreError::SettingsSerialization { .. })
    ));
    assert_eq!(load_or_default(&malformed), GameSettings::default());

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, r#"{ "board": { "width": 8, "height": 4, "seed_rows": 3 } }"#).unwrap();
    assert_eq!(load_or_default(&invalid), GameSettings::default());
}

#[test]
fn test_core_plugin_seeds_board_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    save_settings(&path, &custom_settings()).unwrap();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(CorePlugin::with_settings_path(&path))
        .add_plugins(CheckersPlugin);
    app.update();

    assert_eq!(*app.world().resource::<GameSettings>(), custom_settings());
    let board = app.world().resource::<GameBoard>();
    assert_eq!((board.width(), board.height()), (10, 10));
    assert_eq!(board.count(Side::A), 20);
}

#[test]
fn test_core_plugin_keeps_existing_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    save_settings(&path, &custom_settings()).unwrap();

    let mut app = App::new();
    app.insert_resource(GameSettings::default())
        .add_plugins(CorePlugin::with_settings_path(&path));

    assert_eq!(*app.world().resource::<GameSettings>(), GameSettings::default());
}
