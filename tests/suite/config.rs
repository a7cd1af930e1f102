//! Renderer resolution from config files and flags

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use turnstile::{renderer, sheet};
use turnstile_calculus::Calculus;
use turnstile_render::{AutoWidth, Theme};

use super::shown;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn explicit_config_is_applied() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [theme]
        preset = "ascii"

        [layout]
        rule = "="
        width = "conclusion"

        [labels]
        ir = "imp-R"
        "#,
    );

    let renderer = renderer(Some(path.as_path()), None).unwrap();
    assert_eq!(renderer.theme, Theme::ascii());
    assert_eq!(renderer.style.width, AutoWidth::Conclusion);

    let text = shown(&sheet(&renderer, Calculus::Lk, true).unwrap());
    assert!(text.contains("(imp-R)"));
    assert!(text.contains("=== (I)"));
    assert!(!text.contains('―'));
}

#[test]
fn theme_flag_overrides_config_preset() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[theme]\npreset = \"ascii\"\n");

    let renderer = renderer(Some(path.as_path()), Some("basic")).unwrap();
    assert_eq!(renderer.theme, Theme::basic());
}

#[test]
fn unknown_theme_flag_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let err = renderer(Some(path.as_path()), Some("gothic")).unwrap_err();
    assert!(err.to_string().contains("gothic"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let err = renderer(Some(dir.path().join("missing.toml").as_path()), None).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn invalid_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[layout]\ngap = \"wide\"\n");
    assert!(renderer(Some(path.as_path()), None).is_err());
}
