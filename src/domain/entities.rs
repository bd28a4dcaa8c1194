//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, immutable identifier of an employee.
pub type EmployeeId = u64;

/// Plain nested employee record.
///
/// This is the exchange format with the outside world: hierarchies are seeded
/// from it and exported back into it. The arena never holds these directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub subordinates: Vec<Employee>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subordinates: Vec::new(),
        }
    }

    /// Builder-style helper for assembling hierarchies in code.
    pub fn with_subordinates(mut self, subordinates: Vec<Employee>) -> Self {
        self.subordinates = subordinates;
        self
    }
}

/// Data payload stored in each arena node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeData {
    pub id: EmployeeId,
    pub name: String,
}

impl fmt::Display for EmployeeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A committed move.
///
/// Records both the supervisor before and after the move, so undo restores
/// `from` directly instead of asking the tree where the employee sits now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub employee: EmployeeId,
    pub from: EmployeeId,
    pub to: EmployeeId,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.employee, self.from, self.to)
    }
}

/// Which of the two history stacks an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Undo,
    Redo,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryKind::Undo => write!(f, "undo"),
            HistoryKind::Redo => write!(f, "redo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_toml_without_subordinates_when_deserializing_then_defaults_to_empty() {
        let employee: Employee = toml::from_str("id = 7\nname = \"Will Turner\"\n").unwrap();
        assert_eq!(employee, Employee::new(7, "Will Turner"));
    }

    #[test]
    fn given_history_entry_when_displaying_then_shows_direction() {
        let entry = HistoryEntry {
            employee: 5,
            from: 3,
            to: 2,
        };
        assert_eq!(entry.to_string(), "5: 3 -> 2");
    }
}
