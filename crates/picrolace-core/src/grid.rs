//! Solution strings and grid construction.

use std::mem;

use crate::Position;

/// Errors for malformed puzzle dimensions or solution strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolutionError {
    /// The grid has zero area.
    #[display("grid must have nonzero dimensions, got {width}x{height}")]
    EmptyGrid {
        /// Requested grid width.
        width: usize,
        /// Requested grid height.
        height: usize,
    },
    /// The solution string length differs from `width * height`.
    #[display("solution has {actual} characters but the grid has {expected} cells")]
    LengthMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of characters in the solution string.
        actual: usize,
    },
    /// The solution contains a character other than `'0'` or `'1'`.
    #[display("invalid solution character {found:?} at index {index}")]
    InvalidChar {
        /// Flat index of the offending character.
        index: usize,
        /// The character found there.
        found: char,
    },
}

/// Builds a row-major grid of cells from a flat `'0'`/`'1'` solution string.
///
/// The row is `index / width` and the column `index % width`, computed purely
/// from the flat index. `make_cell` receives each cell's position and whether
/// the solution fills it; all mode-specific initialization (edit mode, saved
/// player marks) belongs to the caller.
///
/// # Errors
///
/// Returns [`SolutionError::EmptyGrid`] for zero-area dimensions,
/// [`SolutionError::LengthMismatch`] when the string does not cover the grid
/// exactly, and [`SolutionError::InvalidChar`] for characters outside
/// `{'0', '1'}`. A short solution is a caller error, never a silently
/// truncated grid.
pub fn build_grid<T>(
    width: usize,
    height: usize,
    solution: &str,
    mut make_cell: impl FnMut(Position, bool) -> T,
) -> Result<Vec<Vec<T>>, SolutionError> {
    if width == 0 || height == 0 {
        return Err(SolutionError::EmptyGrid { width, height });
    }

    let expected = width * height;
    let actual = solution.chars().count();
    if actual != expected {
        return Err(SolutionError::LengthMismatch { expected, actual });
    }

    let mut grid = Vec::with_capacity(height);
    let mut current = Vec::with_capacity(width);
    for (index, ch) in solution.chars().enumerate() {
        let filled = match ch {
            '1' => true,
            '0' => false,
            found => return Err(SolutionError::InvalidChar { index, found }),
        };
        current.push(make_cell(Position::from_index(index, width), filled));
        if current.len() == width {
            grid.push(mem::replace(&mut current, Vec::with_capacity(width)));
        }
    }

    Ok(grid)
}

/// The all-`'0'` solution string for the given dimensions.
#[must_use]
pub fn empty_solution(width: usize, height: usize) -> String {
    "0".repeat(width * height)
}

/// Minimum plausible solution length accepted by [`parse_solution`]
/// (a 5x5 grid).
pub const MIN_SOLUTION_LEN: usize = 25;

/// Extracts a binary solution string from free-form text.
///
/// Tolerates digits split by whitespace or newlines and solutions embedded
/// in surrounding prose, and returns the longest candidate of at least
/// [`MIN_SOLUTION_LEN`] digits. Earlier candidates win ties.
///
/// # Examples
///
/// ```
/// use picrolace_core::parse_solution;
///
/// let raw = "Here is the grid:\n10110\n01001\n11100\n00011\n10101\n";
/// assert_eq!(
///     parse_solution(raw).as_deref(),
///     Some("1011001001111000001110101")
/// );
/// assert_eq!(parse_solution("no solution here"), None);
/// ```
#[must_use]
pub fn parse_solution(raw: &str) -> Option<String> {
    let mut best = String::new();
    let mut current = String::new();

    for ch in raw.chars() {
        match ch {
            '0' | '1' => current.push(ch),
            // Whitespace may split a solution across lines.
            ch if ch.is_whitespace() => {}
            _ => {
                if current.len() > best.len() {
                    best = mem::take(&mut current);
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > best.len() {
        best = current;
    }

    (best.len() >= MIN_SOLUTION_LEN).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::{MIN_SOLUTION_LEN, SolutionError, build_grid, empty_solution, parse_solution};
    use crate::Position;

    #[test]
    fn build_grid_is_row_major() {
        let grid = build_grid(3, 2, "101010", |position, filled| (position, filled))
            .expect("valid solution");
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].len(), 3);
        assert_eq!(grid[0][0], (Position::new(0, 0), true));
        assert_eq!(grid[1][0], (Position::new(1, 0), false));
        assert_eq!(grid[1][1], (Position::new(1, 1), true));
    }

    #[test]
    fn build_grid_rejects_wrong_length() {
        let result = build_grid(5, 5, "101", |_, filled| filled);
        assert_eq!(
            result,
            Err(SolutionError::LengthMismatch {
                expected: 25,
                actual: 3
            })
        );
    }

    #[test]
    fn build_grid_rejects_invalid_chars() {
        let result = build_grid(2, 2, "10x1", |_, filled| filled);
        assert_eq!(
            result,
            Err(SolutionError::InvalidChar {
                index: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn build_grid_rejects_zero_area() {
        let result = build_grid(0, 4, "", |_, filled| filled);
        assert_eq!(result, Err(SolutionError::EmptyGrid { width: 0, height: 4 }));
    }

    #[test]
    fn empty_solution_covers_grid() {
        assert_eq!(empty_solution(3, 2), "000000");
        assert_eq!(empty_solution(0, 7), "");
    }

    #[test]
    fn parse_solution_joins_whitespace_split_digits() {
        let raw = "0 1 0 1 0\n1 1 1 1 1\n0 0 0 0 0\n1 0 1 0 1\n1 1 0 1 1";
        assert_eq!(
            parse_solution(raw).as_deref(),
            Some("0101011111000001010111011")
        );
    }

    #[test]
    fn parse_solution_picks_longest_embedded_candidate() {
        let long = "1".repeat(MIN_SOLUTION_LEN + 5);
        let raw = format!("short 1010 then the answer: {long} done");
        assert_eq!(parse_solution(&raw).as_deref(), Some(long.as_str()));
    }

    #[test]
    fn parse_solution_rejects_short_or_missing() {
        assert_eq!(parse_solution(""), None);
        assert_eq!(parse_solution("1010"), None);
        assert_eq!(parse_solution("the quick brown fox"), None);
    }
}
