//! Core value types and derivation algorithms for picrolace nonogram puzzles.
//!
//! This crate contains the pure, stateless half of the engine:
//!
//! - [`CellValue`], [`Cell`] and the per-cell validity rule ([`is_cell_valid`])
//! - [`Position`], the composite `(row, column)` cell key
//! - Run-length clue derivation ([`derive_line_clues`], [`derive_grid_clues`])
//! - Geometry helpers for drag interactions ([`positions_in_range`],
//!   [`block_run`])
//! - Solution-string handling ([`build_grid`], [`parse_solution`],
//!   [`empty_solution`])
//!
//! The stateful puzzle store that orchestrates these pieces lives in the
//! `picrolace-game` crate.

pub use self::{
    cell::{Cell, CellValue, is_cell_valid},
    clue::{Clue, GridClues, LineKind, derive_grid_clues, derive_line_clues},
    geometry::{block_run, positions_in_range},
    grid::{MIN_SOLUTION_LEN, SolutionError, build_grid, empty_solution, parse_solution},
    position::Position,
};

mod cell;
mod clue;
mod geometry;
mod grid;
mod position;
