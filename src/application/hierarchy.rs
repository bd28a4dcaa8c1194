//! Loading seed hierarchies from TOML files.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Employee, OrgTree};

/// Parse a hierarchy document whose top-level table is the root employee.
pub fn parse_hierarchy(content: &str, path: &Path) -> ApplicationResult<Employee> {
    toml::from_str(content).map_err(|e| ApplicationError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[instrument(level = "debug")]
pub fn load_hierarchy(path: &Path) -> ApplicationResult<Employee> {
    let content = fs::read_to_string(path).with_path_context(path)?;
    let root = parse_hierarchy(&content, path)?;
    debug!("loaded hierarchy rooted at {}", root.id);
    Ok(root)
}

/// Load a hierarchy file and build a tree with the given history limit.
#[instrument(level = "debug")]
pub fn load_org_tree(path: &Path, history_limit: usize) -> ApplicationResult<OrgTree> {
    let root = load_hierarchy(path)?;
    Ok(OrgTree::with_history_limit(root, history_limit)?)
}
