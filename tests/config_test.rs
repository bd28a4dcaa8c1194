//! Integration tests for Settings loading from a local `.orgtree.toml`.
//!
//! These tests run without ORGTREE_* variables and without a global config,
//! so they exercise the local layer on top of compiled defaults.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use orgtree::application::ApplicationError;
use orgtree::config::{local_config_path, Settings};
use orgtree::domain::DEFAULT_HISTORY_LIMIT;

#[test]
fn given_no_local_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(settings.hierarchy, None);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "history_limit = 3\nhierarchy = \"org.toml\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.history_limit, 3);
    assert_eq!(settings.hierarchy, Some(dir.path().join("org.toml")));
}

#[test]
fn given_absolute_hierarchy_when_load_then_kept_as_is() {
    let dir = TempDir::new().unwrap();
    let absolute = PathBuf::from("/srv/org/seed.toml");
    fs::write(
        local_config_path(dir.path()),
        format!("hierarchy = \"{}\"\n", absolute.display()),
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(settings.hierarchy, Some(absolute));
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "history_limit = \"many\"\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_settings_when_rendering_then_round_trips_through_toml() {
    let settings = Settings {
        history_limit: 42,
        hierarchy: Some(PathBuf::from("/srv/org.toml")),
    };

    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, settings);
}
