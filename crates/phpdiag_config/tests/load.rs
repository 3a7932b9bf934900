use std::cell::{Cell, RefCell};
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use phpdiag_config::{CONFIG_FILE_NAME, Config, ConfigError, Reporter, get_ignore_patterns};
use serde_json::json;
use tempfile::TempDir;

fn workspace() -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("failed creating temp dir");
    let path = Utf8Path::from_path(dir.path())
        .expect("temp dir is not utf-8")
        .to_path_buf();
    (dir, path)
}

fn write_config(workspace: &Utf8Path, contents: &str) {
    fs::write(workspace.join(CONFIG_FILE_NAME), contents).expect("failed writing config");
}

/// Collects reported warnings
#[derive(Default)]
struct Warnings(RefCell<Vec<String>>);

impl Reporter for Warnings {
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

impl Warnings {
    fn take(&self) -> Vec<String> {
        self.0.take()
    }
}

#[test]
fn test_loads_valid_config() {
    let (_dir, ws) = workspace();
    let settings = json!({"ignore": ["vendor/**", "tests/fixtures/**"]});
    write_config(&ws, &settings.to_string());

    let warnings = Warnings::default();
    let cfg = Config::load(&ws, &warnings).expect("config should load");

    assert!(warnings.take().is_empty());
    assert_eq!(cfg.settings(), &settings);
    assert_eq!(cfg.path(), ws.join(CONFIG_FILE_NAME).as_path());
    assert_eq!(cfg.ignore_patterns(), ["vendor/**", "tests/fixtures/**"]);
}

#[test]
fn test_returns_none_for_missing_file() {
    let (_dir, ws) = workspace();

    let warnings = Warnings::default();
    let cfg = Config::load(&ws, &warnings);

    assert!(cfg.is_none());
    assert!(warnings.take().is_empty());
    assert!(get_ignore_patterns(cfg.as_ref()).is_empty());
    assert!(matches!(Config::try_load(&ws), Ok(None)));
}

#[test]
fn test_returns_none_for_invalid_json() {
    let (_dir, ws) = workspace();
    write_config(&ws, "{ invalid json }");

    let warnings = Warnings::default();
    let cfg = Config::load(&ws, &warnings);

    assert!(cfg.is_none());
    let warnings = warnings.take();
    assert_eq!(warnings.len(), 1, "expected one warning, got: {warnings:?}");
    assert!(warnings[0].starts_with("Invalid JSON in "));
    assert!(warnings[0].contains(CONFIG_FILE_NAME));

    assert!(matches!(
        Config::try_load(&ws),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_returns_none_for_directory_instead_of_file() {
    let (_dir, ws) = workspace();
    fs::create_dir(ws.join(CONFIG_FILE_NAME)).expect("failed creating dir");

    let warnings = Warnings::default();
    let cfg = Config::load(&ws, &warnings);

    assert!(cfg.is_none());
    assert!(warnings.take().is_empty());
}

#[test]
fn test_loads_empty_config() {
    let (_dir, ws) = workspace();
    write_config(&ws, "{}");

    let cfg = Config::try_load(&ws)
        .expect("config should parse")
        .expect("config should exist");

    assert_eq!(cfg.settings(), &json!({}));
    assert!(cfg.ignore_patterns().is_empty());
}

#[test]
fn test_unreadable_file_degrades_to_none() {
    let (_dir, ws) = workspace();
    // not valid utf-8, so reading it as a string fails
    fs::write(ws.join(CONFIG_FILE_NAME), [0xff, 0xfe, 0x00]).expect("failed writing config");

    let warned = Cell::new(0);
    let cfg = Config::load(&ws, &|_: &str| warned.set(warned.get() + 1));

    assert!(cfg.is_none());
    assert_eq!(warned.get(), 1);
    assert!(matches!(
        Config::try_load(&ws),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_mixed_ignore_entries() {
    let (_dir, ws) = workspace();
    write_config(&ws, r#"{"ignore": ["a/**", 123, null, "b/**"]}"#);

    let cfg = Config::try_load(&ws).expect("config should parse");

    assert_eq!(get_ignore_patterns(cfg.as_ref()), ["a/**", "b/**"]);
}
