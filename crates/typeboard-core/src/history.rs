//! Linear undo/redo over full-state snapshots.

use crate::store::{BoxStore, Snapshot};

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Two stacks of full [`Snapshot`]s.
///
/// Snapshots are recorded *before* a mutation is applied; undo and redo
/// swap the store's current contents with the top of the corresponding
/// stack. Full-state copies trade memory for simplicity, which is fine at
/// the box counts this editor sees.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a pre-mutation snapshot onto the undo stack (call before making
    /// changes). Any new action invalidates forward history, so the redo
    /// stack is cleared unconditionally.
    pub fn record(&mut self, snapshot: Snapshot) {
        log::debug!("recording history snapshot ({} boxes)", snapshot.len());
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        // Limit undo history size
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, store: &mut BoxStore) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(store.snapshot());
            store.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, store: &mut BoxStore) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(store.snapshot());
            store.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
