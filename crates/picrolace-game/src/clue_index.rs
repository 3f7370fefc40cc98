//! Clue storage and identity.

use std::collections::HashMap;

use picrolace_core::{Cell, Clue, derive_grid_clues};

/// Opaque identity of a clue.
///
/// Ids are allocated from a per-store counter and stay unique across
/// edit-mode rebuilds, so a stale id from a previous grid never aliases a
/// current clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct ClueId(u32);

/// The store's clue index: ordered per-line id lists plus an id-to-clue map.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClueIndex {
    clues: HashMap<ClueId, Clue>,
    columns: Vec<Vec<ClueId>>,
    rows: Vec<Vec<ClueId>>,
    next_id: u32,
}

impl ClueIndex {
    /// Replaces all clues with ones derived from the grid's ground truth.
    /// Existing ids are retired, never reused.
    pub(crate) fn rebuild(&mut self, grid: &[Vec<Cell>]) {
        let derived = derive_grid_clues(grid);
        self.clues.clear();
        self.columns = derived
            .columns
            .into_iter()
            .map(|line| self.insert_line(line))
            .collect();
        self.rows = derived
            .rows
            .into_iter()
            .map(|line| self.insert_line(line))
            .collect();
    }

    fn insert_line(&mut self, line: Vec<Clue>) -> Vec<ClueId> {
        line.into_iter()
            .map(|clue| {
                let id = ClueId(self.next_id);
                self.next_id += 1;
                self.clues.insert(id, clue);
                id
            })
            .collect()
    }

    pub(crate) fn get(&self, id: ClueId) -> Option<&Clue> {
        self.clues.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ClueId) -> Option<&mut Clue> {
        self.clues.get_mut(&id)
    }

    pub(crate) fn columns(&self) -> &[Vec<ClueId>] {
        &self.columns
    }

    pub(crate) fn rows(&self) -> &[Vec<ClueId>] {
        &self.rows
    }

    pub(crate) fn clues_mut(&mut self) -> impl Iterator<Item = &mut Clue> {
        self.clues.values_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.clues.clear();
        self.columns.clear();
        self.rows.clear();
        self.next_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use picrolace_core::{CellValue, build_grid};

    use super::ClueIndex;

    #[test]
    fn rebuild_retires_old_ids() {
        let grid = build_grid(2, 2, "1001", |position, filled| picrolace_core::Cell {
            position,
            value: if filled {
                CellValue::Filled
            } else {
                CellValue::Empty
            },
            user_value: CellValue::Empty,
            transient_value: None,
            is_valid: false,
        })
        .expect("valid solution");

        let mut index = ClueIndex::default();
        index.rebuild(&grid);
        let old_id = index.rows()[0][0];
        assert!(index.get(old_id).is_some());

        index.rebuild(&grid);
        assert!(index.get(old_id).is_none());
        assert!(index.get(index.rows()[0][0]).is_some());
    }
}
