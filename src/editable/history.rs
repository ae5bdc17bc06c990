//! Snapshot history (undo/redo) for the document controller.
//!
//! Every entry is a full copy of the serialized content. Both stacks are
//! bounded and evict their oldest entry once the bound is exceeded.

use std::collections::VecDeque;

/// Default number of snapshots kept on each stack
pub const DEFAULT_HISTORY_DEPTH: usize = 20;

/// A bounded stack of content snapshots, newest at the back
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest entry when over capacity
    pub fn push(&mut self, content: String) {
        self.entries.push_back(content);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshots from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Edit history with undo/redo stacks.
///
/// `snapshot` must receive the content as it was immediately before the
/// pending mutation, and must be called before that mutation is applied.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: HistoryStack,
    redo_stack: HistoryStack,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with the default depth
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_DEPTH)
    }

    /// Create a new edit history with the given depth per stack
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: HistoryStack::with_capacity(max_size),
            redo_stack: HistoryStack::with_capacity(max_size),
        }
    }

    /// Record the pre-mutation content (clears redo stack)
    pub fn snapshot(&mut self, content: String) {
        self.redo_stack.clear();
        self.undo_stack.push(content);
    }

    /// Pop the newest undo snapshot, moving `current` onto the redo stack
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Pop the newest redo snapshot, moving `current` onto the undo stack
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of snapshots in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of snapshots in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_stack(&self) -> &HistoryStack {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &HistoryStack {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_undo_redo() {
        let mut history = EditHistory::new();

        history.snapshot("".to_string());
        history.snapshot("a".to_string());

        assert_eq!(history.undo_count(), 2);
        assert!(!history.can_redo());

        // Current content is "ab"; undo restores "a" and remembers "ab"
        let restored = history.undo("ab".to_string()).unwrap();
        assert_eq!(restored, "a");
        assert!(history.can_redo());
        assert_eq!(history.redo_stack().peek(), Some("ab"));

        let redone = history.redo(restored).unwrap();
        assert_eq!(redone, "ab");
        assert!(!history.can_redo());
        assert_eq!(history.undo_stack().peek(), Some("a"));
    }

    #[test]
    fn test_undo_on_empty_is_none() {
        let mut history = EditHistory::new();
        assert!(history.undo("x".to_string()).is_none());
        assert!(history.redo("x".to_string()).is_none());
        assert_eq!(history.redo_count(), 0);
        assert_eq!(history.undo_count(), 0);
    }

    #[test]
    fn test_snapshot_clears_redo() {
        let mut history = EditHistory::new();

        history.snapshot("a".to_string());
        history.undo("b".to_string());
        assert!(history.can_redo());

        history.snapshot("a".to_string());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_history_max_size_evicts_oldest() {
        let mut history = EditHistory::with_max_size(3);

        for i in 0..5 {
            history.snapshot(format!("{}", i));
        }

        assert_eq!(history.undo_count(), 3);
        let kept: Vec<&str> = history.undo_stack().iter().collect();
        assert_eq!(kept, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_stack_push_respects_capacity() {
        let mut stack = HistoryStack::with_capacity(2);
        stack.push("a".to_string());
        stack.push("b".to_string());
        stack.push("c".to_string());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().as_deref(), Some("c"));
        assert_eq!(stack.pop().as_deref(), Some("b"));
        assert!(stack.pop().is_none());
    }
}
