//! The organizational tree: re-parenting with reversible history.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{OrgArena, OrgNode};
use crate::domain::builder::OrgBuilder;
use crate::domain::entities::{Employee, EmployeeData, EmployeeId, HistoryEntry, HistoryKind};
use crate::domain::error::{DomainError, DomainResult, InvalidReference};
use crate::domain::history::{History, DEFAULT_HISTORY_LIMIT};

/// Employee hierarchy supporting `move`, `undo` and `redo`.
///
/// Every operation resolves and validates all ids before touching the tree,
/// so a failed call leaves both the tree and the history unchanged.
#[derive(Debug)]
pub struct OrgTree {
    tree: OrgArena,
    root: Index,
    history: History,
}

impl OrgTree {
    pub fn new(root: Employee) -> DomainResult<Self> {
        Self::with_history_limit(root, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(root: Employee, limit: usize) -> DomainResult<Self> {
        let tree = OrgBuilder::new().build(&root)?;
        let root = tree
            .root()
            .ok_or(InvalidReference::UnknownEmployee(root.id))?;
        Ok(Self {
            tree,
            root,
            history: History::new(limit),
        })
    }

    /// Moves `employee` and their whole team under `supervisor`.
    ///
    /// Moving to the current supervisor re-appends the employee at the end of
    /// the subordinate list and is recorded like any other move.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(
        &mut self,
        employee: EmployeeId,
        supervisor: EmployeeId,
    ) -> DomainResult<()> {
        let entry = self.relocate(employee, supervisor).inspect_err(|e| {
            debug!("move rejected: {}", e);
        })?;
        debug!("moved {}", entry);
        self.history.record(entry);
        Ok(())
    }

    /// Reverts the most recent move, putting the employee back under the
    /// supervisor recorded at move time.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> DomainResult<HistoryEntry> {
        let entry = *self
            .history
            .peek_undo()
            .ok_or(DomainError::NoHistory(HistoryKind::Undo))?;
        self.relocate(entry.employee, entry.from)?;
        self.history.commit_undo();
        debug!("undid {}", entry);
        Ok(entry)
    }

    /// Re-applies the most recently undone move.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) -> DomainResult<HistoryEntry> {
        let entry = *self
            .history
            .peek_redo()
            .ok_or(DomainError::NoHistory(HistoryKind::Redo))?;
        self.relocate(entry.employee, entry.to)?;
        self.history.commit_redo();
        debug!("redid {}", entry);
        Ok(entry)
    }

    /// Validates and performs a re-parent, returning what happened.
    fn relocate(
        &mut self,
        employee: EmployeeId,
        supervisor: EmployeeId,
    ) -> DomainResult<HistoryEntry> {
        let employee_idx = self
            .tree
            .locate(employee)
            .ok_or(InvalidReference::UnknownEmployee(employee))?;
        let supervisor_idx = self
            .tree
            .locate(supervisor)
            .ok_or(InvalidReference::UnknownSupervisor(supervisor))?;
        let current_idx = self.tree.locate_parent(employee)?;

        if employee_idx == supervisor_idx {
            return Err(InvalidReference::SelfSupervision(employee).into());
        }
        if self.tree.is_within(employee_idx, supervisor_idx) {
            return Err(InvalidReference::Cycle {
                employee,
                supervisor,
            }
            .into());
        }

        let from = self.tree.node(current_idx).id();
        self.tree.reparent(employee_idx, supervisor_idx);
        Ok(HistoryEntry {
            employee,
            from,
            to: supervisor,
        })
    }

    pub fn root(&self) -> &OrgNode {
        self.tree.node(self.root)
    }

    pub fn root_id(&self) -> EmployeeId {
        self.root().id()
    }

    /// Read-only access to the underlying arena.
    pub fn arena(&self) -> &OrgArena {
        &self.tree
    }

    pub fn locate(&self, id: EmployeeId) -> Option<&EmployeeData> {
        self.tree.locate(id).map(|idx| &self.tree.node(idx).data)
    }

    /// Supervisor id of `id`; None for the root or an unknown id.
    pub fn supervisor_of(&self, id: EmployeeId) -> Option<EmployeeId> {
        self.tree
            .locate_parent(id)
            .ok()
            .map(|idx| self.tree.node(idx).id())
    }

    /// Direct subordinate ids of `id`, in order.
    pub fn subordinates_of(&self, id: EmployeeId) -> Option<Vec<EmployeeId>> {
        let idx = self.tree.locate(id)?;
        Some(
            self.tree
                .node(idx)
                .children
                .iter()
                .map(|&c| self.tree.node(c).id())
                .collect(),
        )
    }

    /// `id` and everyone reporting to them, directly or not, in preorder.
    pub fn subtree_ids(&self, id: EmployeeId) -> Option<Vec<EmployeeId>> {
        self.tree.locate(id).map(|idx| self.tree.subtree_ids(idx))
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Current shape as plain nested records.
    pub fn to_employee(&self) -> Employee {
        OrgBuilder::new()
            .export(&self.tree)
            .unwrap_or_else(|| Employee::new(self.root_id(), self.root().data.name.clone()))
    }
}
