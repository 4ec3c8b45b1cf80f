use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::error::SketchResult;
use crate::snapshot::Snapshot;
use crate::surface::Surface;
use std::collections::VecDeque;

/// Bounded undo/redo history of whole-surface snapshots
pub struct History {
    /// Committed states, oldest first. The last entry is the current state.
    undo_stack: VecDeque<Snapshot>,
    /// Undone states, most recently undone last
    redo_stack: Vec<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history that keeps at most `capacity` undo states
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(capacity + 1),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Capture the surface and push it as the new current state.
    ///
    /// Evicts the oldest state once over capacity and always discards the
    /// redo stack.
    pub fn commit(&mut self, surface: &Surface) -> SketchResult<()> {
        let snapshot = surface.snapshot()?;
        self.push(snapshot);
        Ok(())
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
        log::debug!(
            "Committed snapshot (undo: {}, redo: {})",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
    }

    /// Step back one state.
    ///
    /// Undoing the last remaining state clears the surface to transparent
    /// instead of restoring anything. Does nothing when there is no history.
    pub fn undo(&mut self, surface: &mut Surface) -> SketchResult<()> {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return Ok(());
        };
        self.redo_stack.push(snapshot);

        match self.undo_stack.back() {
            Some(previous) => surface.restore(previous),
            None => {
                surface.clear();
                Ok(())
            }
        }
    }

    /// Re-apply the most recently undone state. Does nothing when there is
    /// nothing to redo.
    pub fn redo(&mut self, surface: &mut Surface) -> SketchResult<()> {
        let Some(snapshot) = self.redo_stack.pop() else {
            return Ok(());
        };
        let result = surface.restore(&snapshot);
        self.undo_stack.push_back(snapshot);
        result
    }

    /// The last committed state, used as the base for shape previews
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn undo_stack(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo_stack.iter()
    }

    pub fn redo_stack(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
