use std::fs;

use tactic_board::EditorConfig;

#[test]
fn defaults_match_original_tool() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.interaction.ball_grab_radius, 15.0);
    assert_eq!(cfg.interaction.player_grab_radius, 20.0);
    assert_eq!(cfg.interaction.snap_radius, 15.0);
    // 9x18 m court at 30 px/m, net at mid-height.
    assert_eq!(cfg.court.width, 270.0);
    assert_eq!(cfg.court.height, 540.0);
    assert_eq!(cfg.court.net_y(), 270.0);
    assert!(cfg.validate().is_empty());
}

#[test]
fn partial_ron_overlays_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("editor.ron");
    fs::write(
        &path,
        r#"(
            api: (base_url: "http://backend:8080"),
            interaction: (snap_radius: 25.0),
        )"#,
    )
    .expect("write temp ron");

    let cfg = EditorConfig::load_from_file(&path).expect("parse");
    assert_eq!(cfg.api.base_url, "http://backend:8080");
    assert_eq!(cfg.interaction.snap_radius, 25.0);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.interaction.ball_grab_radius, 15.0);
    assert_eq!(cfg.window.title, "Taktikboard");
}

#[test]
fn missing_file_falls_back_to_defaults_with_error() {
    let (cfg, err) = EditorConfig::load_or_default("does/not/exist.ron");
    assert_eq!(cfg, EditorConfig::default());
    assert!(err.is_some());
}

#[test]
fn validate_flags_suspicious_values() {
    let mut cfg = EditorConfig::default();
    cfg.interaction.snap_radius = 0.0;
    cfg.api.base_url = "http://localhost:5000/".into();
    let warnings = cfg.validate().join("\n");
    assert!(warnings.contains("snap_radius"), "{warnings}");
    assert!(warnings.contains("trailing slash"), "{warnings}");
}

#[test]
fn shipped_config_file_parses_clean() {
    let cfg = EditorConfig::load_from_file("assets/config/editor.ron").expect("shipped config");
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn world_court_round_trip() {
    use bevy::prelude::Vec2;
    let cfg = EditorConfig::default();
    let court = Vec2::new(60.0, 50.0);
    let world = cfg.court.court_to_world(court);
    // Top-left origin, y down in court space; centered, y up in world.
    assert_eq!(world, Vec2::new(-75.0, 220.0));
    assert_eq!(cfg.court.world_to_court(world), court);
}
