//! Cell values and the per-cell validity rule.

use crate::Position;

/// The three-state mark a nonogram cell can hold.
///
/// `Marked` is the player's explicit "this cell is empty" annotation,
/// distinct from simply leaving the cell untouched.
///
/// # Examples
///
/// ```
/// use picrolace_core::CellValue;
///
/// assert_eq!(CellValue::from_solution_char('1'), CellValue::Filled);
/// assert_eq!(CellValue::from_solution_char('x'), CellValue::Marked);
/// assert_eq!(CellValue::from_solution_char('.'), CellValue::Empty);
/// assert_eq!(CellValue::Filled.to_solution_char(), '1');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellValue {
    /// No mark.
    #[default]
    Empty,
    /// A filled cell.
    Filled,
    /// Explicitly crossed out as empty.
    Marked,
}

impl CellValue {
    /// Parses one character of a serialized player solution.
    ///
    /// `'1'` is filled and `'x'` is marked; every other character is empty.
    #[must_use]
    pub fn from_solution_char(ch: char) -> Self {
        match ch {
            '1' => Self::Filled,
            'x' => Self::Marked,
            _ => Self::Empty,
        }
    }

    /// Character used when serializing a player solution.
    #[must_use]
    pub fn to_solution_char(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Filled => '1',
            Self::Marked => 'x',
        }
    }
}

/// One cell of the puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Stable identity of the cell.
    pub position: Position,
    /// Ground truth in play mode; the authored target in edit mode.
    pub value: CellValue,
    /// The player's committed mark.
    pub user_value: CellValue,
    /// Uncommitted preview shown only while a drag spans the cell.
    pub transient_value: Option<CellValue>,
    /// Whether `user_value` is consistent with `value`.
    pub is_valid: bool,
}

impl Cell {
    /// The value a drag stamps from this cell: the preview if one is set,
    /// the committed mark otherwise.
    #[must_use]
    pub fn effective_value(&self) -> CellValue {
        self.transient_value.unwrap_or(self.user_value)
    }
}

/// Validity rule for a single cell outside edit mode.
///
/// A mark is valid when it matches the ground truth, or when the player
/// crossed out a cell that is truly empty — a harmless annotation. Every
/// other combination (most importantly a filled cell left empty or crossed
/// out) is invalid.
///
/// # Examples
///
/// ```
/// use picrolace_core::{CellValue, is_cell_valid};
///
/// assert!(is_cell_valid(CellValue::Filled, CellValue::Filled));
/// assert!(is_cell_valid(CellValue::Empty, CellValue::Marked));
/// assert!(!is_cell_valid(CellValue::Filled, CellValue::Marked));
/// ```
#[must_use]
pub fn is_cell_valid(value: CellValue, user_value: CellValue) -> bool {
    user_value == value || (value == CellValue::Empty && user_value == CellValue::Marked)
}
