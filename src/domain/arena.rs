use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{EmployeeData, EmployeeId};
use crate::domain::error::{DomainError, DomainResult, ParentLookupError};

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct OrgNode {
    /// Employee payload for this node
    pub data: EmployeeData,
    /// Index of the supervisor in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of direct subordinates, in insertion order
    pub children: Vec<Index>,
}

impl OrgNode {
    pub fn id(&self) -> EmployeeId {
        self.data.id
    }
}

/// Arena-based hierarchy storage.
///
/// Every node keeps an explicit parent index next to its children, and an id
/// index maps employee ids to arena slots. Locating a node and its parent is
/// O(1), walking towards the root is O(depth). No traversal recurses.
#[derive(Debug)]
pub struct OrgArena {
    arena: Arena<OrgNode>,
    root: Option<Index>,
    ids: HashMap<EmployeeId, Index>,
}

impl Default for OrgArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            ids: HashMap::new(),
        }
    }

    /// Inserts a node below `parent`, or as the root when `parent` is None.
    ///
    /// Ids must be unique across the whole arena; a repeated id is refused
    /// before anything is stored.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(
        &mut self,
        data: EmployeeData,
        parent: Option<Index>,
    ) -> DomainResult<Index> {
        if self.ids.contains_key(&data.id) {
            return Err(DomainError::DuplicateEmployee(data.id));
        }
        let id = data.id;
        let node = OrgNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);
        self.ids.insert(id, node_idx);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    /// Node at `idx`. Indices handed out by this arena stay valid because
    /// nodes are never removed.
    pub fn node(&self, idx: Index) -> &OrgNode {
        &self.arena[idx]
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Finds the node carrying `id`.
    #[instrument(level = "trace", skip(self))]
    pub fn locate(&self, id: EmployeeId) -> Option<Index> {
        self.ids.get(&id).copied()
    }

    /// Finds the direct supervisor of `id`.
    #[instrument(level = "trace", skip(self))]
    pub fn locate_parent(&self, id: EmployeeId) -> Result<Index, ParentLookupError> {
        let idx = self.locate(id).ok_or(ParentLookupError::NotFound(id))?;
        self.node(idx).parent.ok_or(ParentLookupError::Root(id))
    }

    /// True when `node` is `ancestor` or sits anywhere below it.
    #[instrument(level = "trace", skip(self))]
    pub fn is_within(&self, ancestor: Index, node: Index) -> bool {
        let mut current = Some(node);
        while let Some(idx) = current {
            if idx == ancestor {
                return true;
            }
            current = self.node(idx).parent;
        }
        false
    }

    /// Detaches `node` from its current parent and appends it to `new_parent`.
    ///
    /// Callers guarantee that `node` is not the root and that `new_parent` is
    /// not inside the subtree of `node`.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn reparent(&mut self, node: Index, new_parent: Index) {
        if let Some(old_parent) = self.arena[node].parent {
            self.arena[old_parent].children.retain(|&c| c != node);
        }
        self.arena[new_parent].children.push(node);
        self.arena[node].parent = Some(new_parent);
    }

    /// Ids of `idx` and everything below it, in preorder.
    #[instrument(level = "trace", skip(self))]
    pub fn subtree_ids(&self, idx: Index) -> Vec<EmployeeId> {
        PreOrderIterator::starting_at(self, idx)
            .map(|(_, node)| node.id())
            .collect()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    /// Number of levels in the tree; a lone root has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for &child in &self.node(idx).children {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        Self {
            arena,
            stack: arena.root().into_iter().collect(),
        }
    }

    fn starting_at(arena: &'a OrgArena, start: Index) -> Self {
        Self {
            arena,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        Self {
            arena,
            stack: arena.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(id: EmployeeId) -> EmployeeData {
        EmployeeData {
            id,
            name: format!("E{id}"),
        }
    }

    /// 1 -> (2 -> (3, 4), 5)
    fn sample() -> (OrgArena, [Index; 5]) {
        let mut arena = OrgArena::new();
        let i1 = arena.insert_node(data(1), None).unwrap();
        let i2 = arena.insert_node(data(2), Some(i1)).unwrap();
        let i3 = arena.insert_node(data(3), Some(i2)).unwrap();
        let i4 = arena.insert_node(data(4), Some(i2)).unwrap();
        let i5 = arena.insert_node(data(5), Some(i1)).unwrap();
        (arena, [i1, i2, i3, i4, i5])
    }

    #[test]
    fn test_preorder_visits_children_in_insertion_order() {
        let (arena, _) = sample();
        let ids: Vec<_> = arena.iter().map(|(_, n)| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_postorder_visits_children_before_parent() {
        let (arena, _) = sample();
        let ids: Vec<_> = arena.iter_postorder().map(|(_, n)| n.id()).collect();
        assert_eq!(ids, vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let (mut arena, [i1, ..]) = sample();
        let result = arena.insert_node(data(4), Some(i1));
        assert_eq!(result, Err(DomainError::DuplicateEmployee(4)));
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn test_locate_parent_distinguishes_root_from_missing() {
        let (arena, [_, i2, ..]) = sample();
        assert_eq!(arena.locate_parent(3), Ok(i2));
        assert_eq!(arena.locate_parent(1), Err(ParentLookupError::Root(1)));
        assert_eq!(arena.locate_parent(42), Err(ParentLookupError::NotFound(42)));
    }

    #[test]
    fn test_is_within_follows_parent_links() {
        let (arena, [i1, i2, i3, _, i5]) = sample();
        assert!(arena.is_within(i2, i3));
        assert!(arena.is_within(i2, i2));
        assert!(arena.is_within(i1, i5));
        assert!(!arena.is_within(i2, i5));
        assert!(!arena.is_within(i3, i2));
    }

    #[test]
    fn test_reparent_moves_whole_subtree() {
        let (mut arena, [i1, i2, _, _, i5]) = sample();
        arena.reparent(i2, i5);

        assert_eq!(arena.node(i2).parent, Some(i5));
        assert_eq!(arena.node(i1).children, vec![i5]);
        assert_eq!(arena.node(i5).children, vec![i2]);
        assert_eq!(arena.subtree_ids(i2), vec![2, 3, 4]);
        assert_eq!(arena.depth(), 4);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        const DEPTH: u64 = 100_000;
        let mut arena = OrgArena::new();
        let root = arena.insert_node(data(0), None).unwrap();
        let mut last = root;
        for id in 1..DEPTH {
            last = arena.insert_node(data(id), Some(last)).unwrap();
        }

        assert_eq!(arena.depth(), DEPTH as usize);
        assert!(arena.is_within(root, last));
        assert_eq!(arena.iter_postorder().count(), DEPTH as usize);

        let second = arena.locate(1).unwrap();
        arena.reparent(last, root);
        assert_eq!(arena.depth(), (DEPTH - 1) as usize);
        assert_eq!(arena.node(root).children, vec![second, last]);
    }
}
