//! Queueable commands for the puzzle store.

use std::mem;

use picrolace_core::Position;

use crate::ClueId;

/// A command accepted by [`Game::apply`](crate::Game::apply).
///
/// Every variant maps onto one store method; hosts that translate pointer
/// and keyboard events into `Action`s can queue them with [`ActionQueue`]
/// and drain the queue once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Begin a drag gesture on a cell.
    StartDragging(Position),
    /// Extend the active drag to the pointer's current cell.
    ContinueDragging(Position),
    /// Commit the active drag.
    StopDragging,
    /// Flip a clue's crossed-off flag.
    ToggleClue(ClueId),
    /// Revert the most recent committed gesture.
    Undo,
    /// Reapply the most recently undone gesture.
    Redo,
    /// Step the display zoom up one level.
    ZoomIn,
    /// Step the display zoom down one level.
    ZoomOut,
    /// Move or clear the row cross-hair highlight.
    SetHighlightedRow(Option<usize>),
    /// Move or clear the column cross-hair highlight.
    SetHighlightedColumn(Option<usize>),
    /// Restore the store to its pristine uninitialized defaults.
    Reset,
}

/// A simple FIFO of pending actions.
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    /// Enqueues an action for the next drain.
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Removes and returns all pending actions in request order.
    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
