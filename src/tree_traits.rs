//! Rendering hierarchies as `termtree` trees.

use std::collections::HashMap;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{OrgArena, OrgTree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for OrgArena {
    /// Built bottom-up from a post-order walk, so deep hierarchies do not
    /// grow the call stack.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        let mut built: HashMap<_, Tree<String>> = HashMap::new();
        for (idx, node) in self.iter_postorder() {
            let leaves: Vec<_> = node
                .children
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, Tree::new(node.data.to_string()).with_leaves(leaves));
        }

        built
            .remove(&root)
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}

impl TreeNodeConvert for OrgTree {
    fn to_tree_string(&self) -> Tree<String> {
        self.arena().to_tree_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;

    #[test]
    fn test_renders_names_with_ids() {
        let org = OrgTree::new(Employee::new(1, "CEO").with_subordinates(vec![
            Employee::new(2, "A").with_subordinates(vec![Employee::new(3, "A1")]),
            Employee::new(4, "B"),
        ]))
        .unwrap();

        let rendered = org.to_tree_string().to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "CEO (1)");
        assert!(lines[1].ends_with("A (2)"));
        assert!(lines[2].ends_with("A1 (3)"));
        assert!(lines[3].ends_with("B (4)"));
    }

    #[test]
    fn test_empty_arena() {
        assert_eq!(OrgArena::new().to_tree_string().to_string().trim(), "Empty tree");
    }
}
