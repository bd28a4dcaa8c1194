//! Application layer: use cases around the domain
//!
//! Loads seed hierarchies from disk and drives scripted edits against an `OrgTree`.

pub mod error;
pub mod error_ext;
pub mod hierarchy;
pub mod script;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use hierarchy::{load_hierarchy, load_org_tree, parse_hierarchy};
pub use script::{parse_script, run_script, Operation};
