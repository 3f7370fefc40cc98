//! Linear undo/redo history of cell-value deltas.

use std::{collections::VecDeque, num::NonZero};

use picrolace_core::{CellValue, Position};

/// One cell's contribution to a committed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDelta {
    /// The cell that changed.
    pub position: Position,
    /// The committed mark before the batch.
    pub old_value: CellValue,
    /// The committed mark after the batch.
    pub new_value: CellValue,
}

/// The deltas of every cell touched by one committed gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    cells: Vec<CellDelta>,
}

impl HistoryEntry {
    /// Creates an entry from the deltas of one commit.
    #[must_use]
    pub fn new(cells: Vec<CellDelta>) -> Self {
        Self { cells }
    }

    /// Deltas in commit order.
    #[must_use]
    pub fn cells(&self) -> &[CellDelta] {
        &self.cells
    }
}

/// A bounded linear undo/redo log.
///
/// `applied` counts the entries currently in effect: `undo` reverts the
/// latest applied entry, `redo` reapplies the next one, and a push after an
/// undo discards the redo tail. When the log is full the oldest entry is
/// dropped, lowering the undo floor but never breaking the cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: NonZero<usize>,
    applied: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default number of retained entries.
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(5000).unwrap()
    }

    /// Creates an empty history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::default_capacity())
    }

    /// Creates an empty history retaining at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            applied: 0,
        }
    }

    /// Number of recorded entries, applied or redoable.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a committed entry, discarding any redoable tail first.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.applied);
        if self.entries.len() == self.capacity.get() {
            self.entries.pop_front();
            self.applied = self.applied.saturating_sub(1);
        }
        self.entries.push_back(entry);
        self.applied = self.entries.len();
    }

    /// Whether an entry is available to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Whether an entry is available to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Steps the cursor back and returns the entry to revert.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.applied -= 1;
        self.entries.get(self.applied).cloned()
    }

    /// Steps the cursor forward and returns the entry to reapply.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        let entry = self.entries.get(self.applied).cloned();
        self.applied += 1;
        entry
    }

    /// Drops all entries and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }
}
