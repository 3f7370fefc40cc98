//! Run-length clue derivation.

use std::mem;

use crate::{Cell, CellValue, Position};

/// Whether a clue constrains a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A horizontal line of the grid.
    Row,
    /// A vertical line of the grid.
    Column,
}

/// One contiguous run of filled cells in a row or column.
///
/// A line's clues, read in order, are exactly the run-length encoding of that
/// line's ground truth. A line with no filled cells carries a single
/// placeholder clue with `value == 0` so that every line has at least one
/// clue to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    /// Positions of the run's cells in line order; empty for the placeholder.
    pub cells: Vec<Position>,
    /// Index of the line this clue belongs to.
    pub index: usize,
    /// Whether the clue constrains a row or a column.
    pub kind: LineKind,
    /// Run length; `0` for the placeholder clue of an all-empty line.
    pub value: usize,
    /// True iff every member cell is currently valid.
    pub is_valid: bool,
    /// Player-settable "crossed off" flag, independent of cell state.
    pub is_complete: bool,
}

/// Clues for every line of a grid, grouped by axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridClues {
    /// Clues per column, indexed by column.
    pub columns: Vec<Vec<Clue>>,
    /// Clues per row, indexed by row.
    pub rows: Vec<Vec<Clue>>,
}

/// Derives the ordered clues for a single line of cells.
///
/// Scans the line accumulating runs of consecutive filled ground-truth
/// cells. A run is emitted when an empty cell terminates it and again on
/// loop exit, so a run flush against the end of the line is not lost. A
/// clue's validity is the conjunction of its member cells' validity.
///
/// # Examples
///
/// ```
/// use picrolace_core::{Cell, CellValue, LineKind, Position, derive_line_clues};
///
/// let line: Vec<Cell> = "10010"
///     .chars()
///     .enumerate()
///     .map(|(column, ch)| Cell {
///         position: Position::new(0, column),
///         value: CellValue::from_solution_char(ch),
///         user_value: CellValue::Empty,
///         transient_value: None,
///         is_valid: true,
///     })
///     .collect();
/// let refs: Vec<&Cell> = line.iter().collect();
///
/// let clues = derive_line_clues(&refs, 0, LineKind::Row);
/// assert_eq!(clues.len(), 2);
/// assert_eq!(clues[0].value, 1);
/// assert_eq!(clues[0].cells, vec![Position::new(0, 0)]);
/// assert_eq!(clues[1].cells, vec![Position::new(0, 3)]);
/// ```
#[must_use]
pub fn derive_line_clues(line: &[&Cell], index: usize, kind: LineKind) -> Vec<Clue> {
    let mut clues = Vec::new();
    let mut cells: Vec<Position> = Vec::new();
    let mut is_valid = true;

    for cell in line {
        if cell.value == CellValue::Filled {
            cells.push(cell.position);
            is_valid &= cell.is_valid;
        } else if !cells.is_empty() {
            clues.push(Clue {
                value: cells.len(),
                cells: mem::take(&mut cells),
                index,
                kind,
                is_valid,
                is_complete: false,
            });
            is_valid = true;
        }
    }

    // A run touching the end of the line still has to be emitted.
    if !cells.is_empty() {
        clues.push(Clue {
            value: cells.len(),
            cells,
            index,
            kind,
            is_valid,
            is_complete: false,
        });
    }

    if clues.is_empty() {
        clues.push(Clue {
            cells: Vec::new(),
            index,
            kind,
            value: 0,
            is_valid: true,
            is_complete: false,
        });
    }

    clues
}

/// Derives clues for every column and every row of a row-major grid.
#[must_use]
pub fn derive_grid_clues(grid: &[Vec<Cell>]) -> GridClues {
    let width = grid.first().map_or(0, Vec::len);

    let mut columns = Vec::with_capacity(width);
    for column in 0..width {
        let line: Vec<&Cell> = grid.iter().filter_map(|row| row.get(column)).collect();
        columns.push(derive_line_clues(&line, column, LineKind::Column));
    }

    let mut rows = Vec::with_capacity(grid.len());
    for (index, row) in grid.iter().enumerate() {
        let line: Vec<&Cell> = row.iter().collect();
        rows.push(derive_line_clues(&line, index, LineKind::Row));
    }

    GridClues { columns, rows }
}
