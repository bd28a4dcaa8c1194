//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{EmployeeId, HistoryKind};

/// Domain errors represent business logic violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid reference: {0}")]
    InvalidReference(#[from] InvalidReference),

    #[error("nothing to {0}")]
    NoHistory(HistoryKind),

    #[error("duplicate employee id: {0}")]
    DuplicateEmployee(EmployeeId),
}

/// Why a move was structurally refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReference {
    #[error("no employee with id {0}")]
    UnknownEmployee(EmployeeId),

    #[error("no supervisor with id {0}")]
    UnknownSupervisor(EmployeeId),

    #[error("employee {0} is the root and cannot be moved")]
    RootMove(EmployeeId),

    #[error("employee {0} cannot supervise themselves")]
    SelfSupervision(EmployeeId),

    #[error("supervisor {supervisor} reports to employee {employee}")]
    Cycle {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },
}

/// Outcome of a failed parent lookup.
///
/// The root legitimately has no parent, which is a different situation from
/// an id that is not in the tree at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentLookupError {
    #[error("employee {0} is the root and has no supervisor")]
    Root(EmployeeId),

    #[error("employee {0} not found")]
    NotFound(EmployeeId),
}

impl From<ParentLookupError> for InvalidReference {
    fn from(e: ParentLookupError) -> Self {
        match e {
            ParentLookupError::Root(id) => InvalidReference::RootMove(id),
            ParentLookupError::NotFound(id) => InvalidReference::UnknownEmployee(id),
        }
    }
}

impl From<ParentLookupError> for DomainError {
    fn from(e: ParentLookupError) -> Self {
        DomainError::InvalidReference(e.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
