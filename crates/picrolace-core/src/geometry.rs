//! Span and run computations for drag interactions.

use std::ops::RangeInclusive;

use crate::{CellValue, Position};

/// Every position in the axis-aligned rectangle spanned by two corners, in
/// row-major order.
///
/// Degenerates to a single row or column for linear drags, and to a single
/// cell when both corners coincide.
///
/// # Examples
///
/// ```
/// use picrolace_core::{Position, positions_in_range};
///
/// let range = positions_in_range(Position::new(3, 3), Position::new(1, 1));
/// assert_eq!(range.len(), 9);
/// assert_eq!(range[0], Position::new(1, 1));
/// assert_eq!(range[8], Position::new(3, 3));
/// ```
#[must_use]
pub fn positions_in_range(a: Position, b: Position) -> Vec<Position> {
    let rows = a.row().min(b.row())..=a.row().max(b.row());
    let columns = a.column().min(b.column())..=a.column().max(b.column());

    let mut positions = Vec::with_capacity(rows.clone().count() * columns.clone().count());
    for row in rows {
        for column in columns.clone() {
            positions.push(Position::new(row, column));
        }
    }
    positions
}

/// Length of the contiguous run adjacent to `span` that would merge with a
/// drag of `value`.
///
/// `line` holds the committed user values of the full row or column being
/// dragged along, and `span` is the dragged slice of it. Cells before the
/// span extend the run while they match `value`; a mismatch resets the run
/// to zero and keeps scanning, so only the segment touching the span's near
/// edge survives. Cells after the span extend the run until the first
/// mismatch, which stops the scan entirely — a segment past an interruption
/// can no longer connect through the drag and must not be counted.
///
/// The returned count covers only matching cells outside the span; callers
/// combine it with the span's own length for display.
#[must_use]
pub fn block_run(line: &[CellValue], span: RangeInclusive<usize>, value: CellValue) -> usize {
    let mut run = 0;
    for (index, cell) in line.iter().enumerate() {
        if span.contains(&index) {
            continue;
        }
        if index < *span.start() {
            if *cell == value {
                run += 1;
            } else {
                run = 0;
            }
        } else if *cell == value {
            run += 1;
        } else {
            break;
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::{block_run, positions_in_range};
    use crate::{CellValue, Position};

    fn values(spec: &str) -> Vec<CellValue> {
        spec.chars().map(CellValue::from_solution_char).collect()
    }

    #[test]
    fn range_is_row_major_rectangle() {
        let range = positions_in_range(Position::new(1, 1), Position::new(3, 3));
        let expected: Vec<Position> = (1..=3)
            .flat_map(|row| (1..=3).map(move |column| Position::new(row, column)))
            .collect();
        assert_eq!(range, expected);
    }

    #[test]
    fn range_of_single_cell() {
        let pos = Position::new(2, 2);
        assert_eq!(positions_in_range(pos, pos), vec![pos]);
    }

    #[test]
    fn range_degenerates_to_line() {
        let range = positions_in_range(Position::new(0, 4), Position::new(0, 0));
        assert_eq!(range.len(), 5);
        assert!(range.iter().all(|pos| pos.row() == 0));
    }

    #[test]
    fn block_run_counts_adjacent_matches_on_both_sides() {
        // Two filled touching the span on each side.
        let line = values("0110011");
        assert_eq!(block_run(&line, 3..=4, CellValue::Filled), 4);
    }

    #[test]
    fn block_run_resets_before_span_on_mismatch() {
        // The leading run is cut off from the span by an empty cell; only
        // the segment touching the span edge counts.
        let line = values("1101100");
        assert_eq!(block_run(&line, 5..=6, CellValue::Filled), 2);
    }

    #[test]
    fn block_run_breaks_after_span_on_mismatch() {
        // The trailing "11" is separated from the span and must not count.
        let line = values("0010011");
        assert_eq!(block_run(&line, 0..=1, CellValue::Filled), 1);
    }

    #[test]
    fn block_run_ignores_other_values() {
        let line = vec![
            CellValue::Marked,
            CellValue::Filled,
            CellValue::Empty,
            CellValue::Marked,
        ];
        assert_eq!(block_run(&line, 2..=2, CellValue::Marked), 1);
    }

    #[test]
    fn block_run_is_zero_when_span_covers_line() {
        let line = values("111");
        assert_eq!(block_run(&line, 0..=2, CellValue::Filled), 0);
    }
}
