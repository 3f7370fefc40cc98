//! Grid positions.

use std::fmt::{self, Display};

/// A cell position identified by `(row, column)`.
///
/// This is the stable identity of a cell for the lifetime of a puzzle. Rows
/// are counted from the top, columns from the left, and grids are laid out in
/// row-major order.
///
/// # Examples
///
/// ```
/// use picrolace_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.column(), 3);
///
/// // Row-major flat index on a grid 5 cells wide
/// assert_eq!(pos.to_index(5), 13);
/// assert_eq!(Position::from_index(13, 5), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position from a row and column index.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index, counted from the top.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index, counted from the left.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Flat row-major index on a grid of the given width.
    #[must_use]
    pub const fn to_index(self, width: usize) -> usize {
        self.row * width + self.column
    }

    /// Position of a flat row-major index on a grid of the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            column: index % width,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn index_roundtrip() {
        for index in 0..30 {
            let pos = Position::from_index(index, 6);
            assert_eq!(pos.to_index(6), index);
        }
    }

    #[test]
    fn display_uses_row_dash_column() {
        assert_eq!(Position::new(4, 11).to_string(), "4-11");
    }
}
