//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod history;
pub mod org;

pub use arena::{OrgArena, OrgNode};
pub use builder::OrgBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult, InvalidReference, ParentLookupError};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use org::OrgTree;
