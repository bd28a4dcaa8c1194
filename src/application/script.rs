//! Move/undo/redo scripts.
//!
//! A script is a whitespace separated list of operations:
//! `move:<employee>:<supervisor>` (or `<employee>-><supervisor>`), `undo`, `redo`.
//! Everything after `#` on a line is ignored.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DomainResult, EmployeeId, OrgTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Move {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },
    Undo,
    Redo,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Move {
                employee,
                supervisor,
            } => write!(f, "move:{}:{}", employee, supervisor),
            Operation::Undo => write!(f, "undo"),
            Operation::Redo => write!(f, "redo"),
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undo" => return Ok(Operation::Undo),
            "redo" => return Ok(Operation::Redo),
            _ => {}
        }

        let pair = match s.strip_prefix("move:") {
            Some(rest) => rest.split_once(':'),
            None => s.split_once("->"),
        };
        let (employee, supervisor) = pair.ok_or_else(|| format!("unknown operation '{}'", s))?;

        Ok(Operation::Move {
            employee: parse_id(employee)?,
            supervisor: parse_id(supervisor)?,
        })
    }
}

fn parse_id(s: &str) -> Result<EmployeeId, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid employee id '{}'", s))
}

impl Operation {
    pub fn apply(&self, org: &mut OrgTree) -> DomainResult<()> {
        match *self {
            Operation::Move {
                employee,
                supervisor,
            } => org.move_employee(employee, supervisor),
            Operation::Undo => org.undo().map(|_| ()),
            Operation::Redo => org.redo().map(|_| ()),
        }
    }
}

/// Parse a script, reporting 1-based line numbers on error.
pub fn parse_script(text: &str) -> ApplicationResult<Vec<Operation>> {
    let mut operations = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        for token in code.split_whitespace() {
            let op = token.parse::<Operation>().map_err(|message| ApplicationError::Script {
                line: i + 1,
                message,
            })?;
            operations.push(op);
        }
    }
    Ok(operations)
}

/// Apply operations in order, stopping at the first failure.
///
/// Operations applied before the failure stay applied.
#[instrument(level = "debug", skip(org))]
pub fn run_script(org: &mut OrgTree, operations: &[Operation]) -> ApplicationResult<()> {
    for op in operations {
        op.apply(org)
            .map_err(|source| ApplicationError::OperationFailed {
                operation: op.to_string(),
                source,
            })?;
        debug!("applied {}", op);
    }
    Ok(())
}
