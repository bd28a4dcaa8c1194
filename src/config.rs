//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Local config: `<dir>/.orgtree.toml`
//! 4. Environment variables: `ORGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_HISTORY_LIMIT;
use crate::util::path::{expand_env_vars, resolve_against};

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Entries kept on each of the undo and redo stacks
    pub history_limit: usize,
    /// Hierarchy file used when a command is given none
    pub hierarchy: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            hierarchy: None,
        }
    }
}

/// Raw settings for intermediate parsing; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub history_limit: Option<usize>,
    pub hierarchy: Option<PathBuf>,
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".orgtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    ///
    /// Relative hierarchy paths in a file layer resolve against `base`,
    /// the directory holding that file.
    fn merge_with(&self, overlay: &RawSettings, base: Option<&Path>) -> Self {
        let hierarchy = overlay.hierarchy.as_ref().map(|p| {
            let expanded = PathBuf::from(expand_env_vars(&p.to_string_lossy()));
            match base {
                Some(dir) => resolve_against(dir, &expanded),
                None => expanded,
            }
        });
        Self {
            history_limit: overlay.history_limit.unwrap_or(self.history_limit),
            hierarchy: hierarchy.or_else(|| self.hierarchy.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory searched for `.orgtree.toml`
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw, global_path.parent());
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw, Some(dir));
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        debug!("settings: {:?}", current);
        Ok(current)
    }

    /// Apply ORGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("ORGTREE"))
            .build()
            .map_err(config_err)?;

        let history_limit = match config.get_int("history_limit") {
            Ok(val) => Some(usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("ORGTREE_HISTORY_LIMIT must not be negative, got {}", val),
            })?),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(config_err(e)),
        };
        let hierarchy = config.get_string("hierarchy").ok().map(PathBuf::from);

        Ok(settings.merge_with(
            &RawSettings {
                history_limit,
                hierarchy,
            },
            None,
        ))
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
