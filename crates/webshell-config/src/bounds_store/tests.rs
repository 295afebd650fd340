//! Tests for bounds record loading and saving.

use super::*;
use std::path::Path;
use webshell_common::{ConfigError, WindowBounds, WindowState};

#[test]
fn load_missing_file_is_read_error() {
    let result = load_bounds(Path::new("/tmp/nonexistent_webshell_dir/Window.json"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn load_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = load_bounds(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_valid_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");
    std::fs::write(
        &path,
        r#"{
  "left": 120,
  "top": 80,
  "width": 1280,
  "height": 720,
  "windowState": "maximized"
}"#,
    )
    .unwrap();

    let bounds = load_bounds(&path).unwrap();
    assert_eq!(
        bounds,
        WindowBounds {
            left: 120,
            top: 80,
            width: 1280,
            height: 720,
            window_state: WindowState::Maximized,
        }
    );
}

#[test]
fn load_or_default_without_record() {
    let dir = tempfile::tempdir().unwrap();
    let bounds = load_or_default(&dir.path().join("Window.json"), 800, 600);
    assert_eq!(bounds, WindowBounds::with_size(800, 600));
    assert_eq!(bounds.window_state, WindowState::Normal);
}

#[test]
fn load_or_default_prefers_record_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");
    let saved = WindowBounds {
        left: 5,
        top: 6,
        width: 1024,
        height: 768,
        window_state: WindowState::Normal,
    };
    save_bounds(&saved, &path).unwrap();

    let bounds = load_or_default(&path, 800, 600);
    assert_eq!(bounds, saved);
}

#[test]
fn load_or_default_ignores_malformed_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");
    std::fs::write(&path, r#"{"left":"far"}"#).unwrap();

    let bounds = load_or_default(&path, 640, 480);
    assert_eq!(bounds, WindowBounds::with_size(640, 480));
}

#[test]
fn save_writes_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");

    save_bounds(&WindowBounds::with_size(800, 600), &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\n  \"left\": 0"));
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "left": 0,
            "top": 0,
            "width": 800,
            "height": 600,
            "windowState": "normal"
        })
    );
}

#[test]
fn save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("MyApp").join("Window.json");

    save_bounds(&WindowBounds::with_size(300, 200), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn save_overwrites_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");

    save_bounds(&WindowBounds::with_size(300, 200), &path).unwrap();
    let mut moved = WindowBounds::with_size(310, 210);
    moved.window_state = WindowState::Fullscreen;
    save_bounds(&moved, &path).unwrap();

    assert_eq!(load_bounds(&path).unwrap(), moved);
}

#[test]
fn save_cleans_up_tmp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Window.json");

    save_bounds(&WindowBounds::with_size(800, 600), &path).unwrap();

    let tmp_path = path.with_extension("json.tmp");
    assert!(!tmp_path.exists(), "tmp file should be renamed away");
}

#[test]
fn save_into_unwritable_location_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();

    let result = save_bounds(
        &WindowBounds::with_size(800, 600),
        &blocker.join("Window.json"),
    );
    assert!(matches!(result, Err(ConfigError::WriteError(_))));
}
