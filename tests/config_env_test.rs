//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary with a single test: it mutates process-wide
//! environment variables.

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use orgtree::application::ApplicationError;
use orgtree::config::{local_config_path, Settings};

#[test]
fn given_env_vars_when_load_then_override_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "history_limit = 3\nhierarchy = \"org.toml\"\n",
    )
    .unwrap();

    env::set_var("ORGTREE_HISTORY_LIMIT", "7");
    env::set_var("ORGTREE_HIERARCHY", "/tmp/from-env.toml");
    let settings = Settings::load(Some(dir.path()));

    env::set_var("ORGTREE_HISTORY_LIMIT", "-1");
    let negative = Settings::load(Some(dir.path()));

    env::remove_var("ORGTREE_HISTORY_LIMIT");
    env::remove_var("ORGTREE_HIERARCHY");

    let settings = settings.expect("load settings");
    assert_eq!(settings.history_limit, 7);
    assert_eq!(settings.hierarchy, Some(PathBuf::from("/tmp/from-env.toml")));
    assert!(matches!(negative, Err(ApplicationError::Config { .. })));
}
