//! Bounded undo/redo stacks of committed moves.

use crate::domain::entities::HistoryEntry;

/// Default number of entries each stack keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Undo and redo stacks, each capped at `limit` entries.
///
/// Overflow drops the oldest entries. A limit of 0 keeps nothing.
#[derive(Debug, Clone)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records a fresh move. Invalidates everything on the redo stack.
    pub fn record(&mut self, entry: HistoryEntry) {
        push_bounded(&mut self.undo, entry, self.limit);
        self.redo.clear();
    }

    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.undo.last()
    }

    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        self.redo.last()
    }

    /// Moves the newest undo entry onto the redo stack.
    pub(crate) fn commit_undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.undo.pop()?;
        push_bounded(&mut self.redo, entry, self.limit);
        Some(entry)
    }

    /// Moves the newest redo entry back onto the undo stack, leaving the rest
    /// of the redo stack intact.
    pub(crate) fn commit_redo(&mut self) -> Option<HistoryEntry> {
        let entry = self.redo.pop()?;
        push_bounded(&mut self.undo, entry, self.limit);
        Some(entry)
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> &[HistoryEntry] {
        &self.undo
    }

    /// Redo entries, oldest first.
    pub fn redo_entries(&self) -> &[HistoryEntry] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

fn push_bounded(stack: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: usize) {
    stack.push(entry);
    if stack.len() > limit {
        stack.drain(..stack.len() - limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(employee: u64) -> HistoryEntry {
        HistoryEntry {
            employee,
            from: 1,
            to: 2,
        }
    }

    #[test]
    fn record_clears_redo() {
        let mut history = History::default();
        history.record(entry(3));
        history.commit_undo();
        assert!(history.can_redo());

        history.record(entry(4));
        assert!(!history.can_redo());
        assert_eq!(history.undo_entries(), &[entry(4)]);
    }

    #[test]
    fn undo_then_redo_round_trips_the_entry() {
        let mut history = History::default();
        history.record(entry(3));

        assert_eq!(history.commit_undo(), Some(entry(3)));
        assert!(!history.can_undo());
        assert_eq!(history.peek_redo(), Some(&entry(3)));

        assert_eq!(history.commit_redo(), Some(entry(3)));
        assert_eq!(history.peek_undo(), Some(&entry(3)));
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_yield_nothing() {
        let mut history = History::default();
        assert_eq!(history.commit_undo(), None);
        assert_eq!(history.commit_redo(), None);
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut history = History::new(3);
        for id in 0..5 {
            history.record(entry(id));
        }
        assert_eq!(history.undo_entries(), &[entry(2), entry(3), entry(4)]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        history.record(entry(1));
        assert!(!history.can_undo());
        assert_eq!(history.commit_undo(), None);
    }
}
