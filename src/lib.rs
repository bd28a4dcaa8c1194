//! Organizational hierarchy as an arena-backed tree.
//!
//! [`domain::OrgTree`] moves employees together with their reports and keeps
//! bounded undo/redo history of those moves. The remaining modules load seed
//! hierarchies, read settings and drive the `orgtree` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    DomainError, Employee, EmployeeId, HistoryEntry, InvalidReference, OrgTree,
};
