//! Builds arena hierarchies from plain nested employee records.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::arena::OrgArena;
use crate::domain::entities::{Employee, EmployeeData};
use crate::domain::error::DomainResult;

/// Constructs an [`OrgArena`] from a nested [`Employee`] tree.
#[derive(Debug, Default)]
pub struct OrgBuilder;

impl OrgBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the arena, keeping each node's subordinate order.
    ///
    /// Fails with `DuplicateEmployee` on the first repeated id.
    #[instrument(level = "debug", skip(self, root), fields(root = root.id))]
    pub fn build(&self, root: &Employee) -> DomainResult<OrgArena> {
        let mut tree = OrgArena::new();
        let mut stack = vec![(root, None)];

        while let Some((employee, parent_idx)) = stack.pop() {
            let data = EmployeeData {
                id: employee.id,
                name: employee.name.clone(),
            };
            let current_idx = tree.insert_node(data, parent_idx)?;

            // Reverse so the first subordinate is inserted first
            for subordinate in employee.subordinates.iter().rev() {
                stack.push((subordinate, Some(current_idx)));
            }
        }

        debug!(employees = tree.len(), "built hierarchy");
        Ok(tree)
    }

    /// Rebuild the nested record form of `tree`.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn export(&self, tree: &OrgArena) -> Option<Employee> {
        let root = tree.root()?;
        let mut finished: HashMap<_, Employee> = HashMap::new();

        for (idx, node) in tree.iter_postorder() {
            let subordinates = node
                .children
                .iter()
                .filter_map(|child| finished.remove(child))
                .collect();
            finished.insert(
                idx,
                Employee {
                    id: node.data.id,
                    name: node.data.name.clone(),
                    subordinates,
                },
            );
        }

        finished.remove(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    fn sample() -> Employee {
        Employee::new(1, "CEO").with_subordinates(vec![
            Employee::new(2, "A").with_subordinates(vec![Employee::new(3, "A1")]),
            Employee::new(4, "B"),
            Employee::new(5, "C"),
        ])
    }

    #[test]
    fn given_nested_employees_when_building_then_keeps_order() {
        let tree = OrgBuilder::new().build(&sample()).unwrap();

        let ids: Vec<_> = tree.iter().map(|(_, n)| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn given_duplicate_ids_when_building_then_errors() {
        let root = Employee::new(1, "CEO")
            .with_subordinates(vec![Employee::new(2, "A"), Employee::new(2, "B")]);

        let result = OrgBuilder::new().build(&root);

        assert!(matches!(result, Err(DomainError::DuplicateEmployee(2))));
    }

    #[test]
    fn given_built_tree_when_exporting_then_matches_input() {
        let builder = OrgBuilder::new();
        let tree = builder.build(&sample()).unwrap();

        assert_eq!(builder.export(&tree), Some(sample()));
    }

    #[test]
    fn given_empty_arena_when_exporting_then_returns_none() {
        assert_eq!(OrgBuilder::new().export(&OrgArena::new()), None);
    }
}
