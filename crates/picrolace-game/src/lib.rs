//! Stateful puzzle store for picrolace nonogram puzzles.
//!
//! The [`Game`] type owns the grid, the clue index, the drag session, and the
//! undo/redo history, and exposes the command API the hosting UI drives:
//! initialize, drag gestures, clue toggling, history navigation, and the
//! small display affordances (zoom, cross-hair highlight).
//!
//! All commands are synchronous and either fully apply or fully no-op;
//! out-of-sequence commands (a move event with no active drag, undo at the
//! history floor) are safe no-ops so duplicated or late UI events cannot
//! corrupt state. The engine performs no I/O — persistence is the host's
//! concern, served by [`GameSnapshot`] and the serialized user solution.
//!
//! # Example
//!
//! ```
//! use picrolace_core::Position;
//! use picrolace_game::{Game, InitOptions, PuzzleInput};
//!
//! let input = PuzzleInput::new(5, 1, "10010");
//! let mut game = Game::new(&input, &InitOptions::default())?;
//!
//! // Fill the whole row with one drag.
//! game.start_dragging(Position::new(0, 0));
//! game.continue_dragging(Position::new(0, 4));
//! game.stop_dragging();
//!
//! assert!(game.can_undo());
//! # Ok::<(), picrolace_core::SolutionError>(())
//! ```

pub use picrolace_core::SolutionError;

pub use self::{
    action::{Action, ActionQueue},
    clue_index::ClueId,
    drag::{DragDirection, MarkedCellsCount},
    game::{Game, InitOptions, PuzzleInput},
    history::{CellDelta, History, HistoryEntry},
    snapshot::GameSnapshot,
    zoom::ZoomLevel,
};

mod action;
mod clue_index;
mod drag;
mod game;
mod history;
mod snapshot;
mod zoom;
