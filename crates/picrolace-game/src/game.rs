//! The puzzle store and its command API.

use picrolace_core::{
    Cell, CellValue, Clue, Position, SolutionError, build_grid, block_run, is_cell_valid,
    positions_in_range,
};

use crate::{
    Action, ClueId, DragDirection, History, HistoryEntry, MarkedCellsCount, ZoomLevel,
    clue_index::ClueIndex,
    drag::DragSession,
    history::CellDelta,
};

/// The puzzle a game is initialized from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Row-major `'0'`/`'1'` ground truth, `width * height` characters.
    pub solution: String,
}

impl PuzzleInput {
    /// Creates a puzzle input.
    #[must_use]
    pub fn new(width: usize, height: usize, solution: impl Into<String>) -> Self {
        Self {
            width,
            height,
            solution: solution.into(),
        }
    }
}

/// Options for [`Game::initialize`].
///
/// ```
/// use picrolace_game::InitOptions;
///
/// let options = InitOptions::default().is_editing(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    is_editing: bool,
    reset: bool,
    user_solution: Option<String>,
}

impl InitOptions {
    /// Starts the game in authoring mode: the player's marks define the
    /// ground truth and clues follow them live.
    #[must_use]
    pub fn is_editing(mut self, is_editing: bool) -> Self {
        self.is_editing = is_editing;
        self
    }

    /// Discards any saved marks and starts from a blank grid. Takes
    /// precedence over [`user_solution`](Self::user_solution).
    #[must_use]
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// Restores previously saved marks (`'0'`/`'1'`/`'x'`, row-major).
    /// Unknown characters and missing positions restore as empty.
    #[must_use]
    pub fn user_solution(mut self, user_solution: impl Into<String>) -> Self {
        self.user_solution = Some(user_solution.into());
        self
    }
}

/// The stateful puzzle store.
///
/// Owns the grid, clue index, drag session, and undo/redo history, and
/// applies every mutation synchronously. A default-constructed game is an
/// empty placeholder; [`Game::new`] or [`Game::initialize`] loads a puzzle.
#[derive(Debug, Default)]
pub struct Game {
    width: usize,
    height: usize,
    grid: Vec<Vec<Cell>>,
    clues: ClueIndex,
    is_editing: bool,
    is_complete: bool,
    zoom_level: ZoomLevel,
    highlighted_row: Option<usize>,
    highlighted_column: Option<usize>,
    drag: Option<DragSession>,
    marked_cells_count: MarkedCellsCount,
    history: History,
    user_solution: String,
}

impl Game {
    /// Creates a game and initializes it from `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolutionError`] when the input's dimensions and solution
    /// string disagree.
    pub fn new(input: &PuzzleInput, options: &InitOptions) -> Result<Self, SolutionError> {
        let mut game = Self::default();
        game.initialize(input, options)?;
        Ok(game)
    }

    /// Loads a puzzle into the store, replacing any previous one.
    ///
    /// History, the drag session, and highlights are cleared; the zoom level
    /// carries over so reloading does not jolt the display.
    ///
    /// # Errors
    ///
    /// Returns a [`SolutionError`] when the input's dimensions and solution
    /// string disagree. On error the store is left unchanged.
    pub fn initialize(
        &mut self,
        input: &PuzzleInput,
        options: &InitOptions,
    ) -> Result<(), SolutionError> {
        let saved: Option<Vec<CellValue>> = options
            .user_solution
            .as_deref()
            .map(|marks| marks.chars().map(CellValue::from_solution_char).collect());

        let grid = build_grid(input.width, input.height, &input.solution, |position, filled| {
            let value = if filled {
                CellValue::Filled
            } else {
                CellValue::Empty
            };
            let user_value = if options.is_editing {
                value
            } else if options.reset {
                CellValue::Empty
            } else {
                saved
                    .as_ref()
                    .and_then(|marks| marks.get(position.to_index(input.width)).copied())
                    .unwrap_or_default()
            };
            let is_valid = options.is_editing || is_cell_valid(value, user_value);
            Cell {
                position,
                value,
                user_value,
                transient_value: None,
                is_valid,
            }
        })?;

        self.width = input.width;
        self.height = input.height;
        self.grid = grid;
        self.is_editing = options.is_editing;
        self.is_complete = false;
        self.highlighted_row = None;
        self.highlighted_column = None;
        self.drag = None;
        self.marked_cells_count = MarkedCellsCount::default();
        self.history.clear();
        self.clues.rebuild(&self.grid);
        self.refresh_completion();
        self.refresh_user_solution();
        log::debug!(
            "initialized {}x{} puzzle (editing: {})",
            self.width,
            self.height,
            self.is_editing
        );
        Ok(())
    }

    /// Returns the store to its pristine uninitialized defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Begins a drag gesture on a cell.
    ///
    /// The stamped preview cycles from the cell's committed mark: empty
    /// becomes filled, filled becomes marked (or empty in authoring mode),
    /// marked becomes empty. Out-of-bounds positions are ignored.
    pub fn start_dragging(&mut self, position: Position) {
        let is_editing = self.is_editing;
        let Some(cell) = self.cell_mut(position) else {
            return;
        };
        let preview = match cell.user_value {
            CellValue::Empty => CellValue::Filled,
            CellValue::Filled if is_editing => CellValue::Empty,
            CellValue::Filled => CellValue::Marked,
            CellValue::Marked => CellValue::Empty,
        };
        cell.transient_value = Some(preview);
        self.drag = Some(DragSession::new(position));
        self.marked_cells_count = MarkedCellsCount {
            count: 1,
            block_count: 0,
        };
    }

    /// Extends the active drag to the pointer's current cell.
    ///
    /// The first move away from the start cell locks the drag to that axis;
    /// later positions are clamped onto it, and returning to the start cell
    /// unlocks the axis again. The cross-hair highlight follows the pointer
    /// whether or not a drag is active. Out-of-bounds positions are ignored.
    pub fn continue_dragging(&mut self, position: Position) {
        if position.row() >= self.height || position.column() >= self.width {
            return;
        }
        self.highlighted_row = Some(position.row());
        self.highlighted_column = Some(position.column());

        let Some(mut session) = self.drag else {
            return;
        };
        let start = session.start;

        let direction = session.direction.unwrap_or(if position.row() == start.row() {
            DragDirection::Horizontal
        } else {
            DragDirection::Vertical
        });
        let end = match direction {
            DragDirection::Horizontal => Position::new(start.row(), position.column()),
            DragDirection::Vertical => Position::new(position.row(), start.column()),
        };
        session.end = end;
        session.direction = (end != start).then_some(direction);
        self.drag = Some(session);

        self.marked_cells_count = self.drag_feedback(start, end, direction);

        // Recomputing the whole preview keeps shrunk drags from leaving
        // stale transient marks behind.
        let stamp = self.grid[start.row()][start.column()].effective_value();
        self.clear_transients();
        for spanned in positions_in_range(start, end) {
            if let Some(cell) = self.cell_mut(spanned) {
                cell.transient_value = Some(stamp);
            }
        }
    }

    /// Commits the active drag as one history entry.
    ///
    /// Without an active drag this only clears leftover preview state, so a
    /// duplicate release event is harmless.
    pub fn stop_dragging(&mut self) {
        if let Some(session) = self.drag.take() {
            let stamp = self.grid[session.start.row()][session.start.column()].effective_value();
            let positions = positions_in_range(session.start, session.end);
            self.update_cells(&positions, stamp);
        }
        self.marked_cells_count = MarkedCellsCount::default();
        self.clear_transients();
    }

    /// Flips a clue's crossed-off flag.
    ///
    /// Purely a bookkeeping aid for the player; cell marks are untouched.
    /// Unknown (retired) ids are ignored.
    pub fn toggle_clue(&mut self, id: ClueId) {
        if let Some(clue) = self.clues.get_mut(id) {
            clue.is_complete = !clue.is_complete;
        }
    }

    /// Reverts the most recently committed gesture.
    ///
    /// Returns `false` at the history floor.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo() else {
            return false;
        };
        self.apply_history(&entry, true);
        true
    }

    /// Reapplies the most recently undone gesture.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo() else {
            return false;
        };
        self.apply_history(&entry, false);
        true
    }

    /// Steps the display zoom up one level, clamping at the largest.
    pub fn zoom_in(&mut self) {
        if let Some(next) = self.zoom_level.zoomed_in() {
            self.zoom_level = next;
        }
    }

    /// Steps the display zoom down one level, clamping at the smallest.
    pub fn zoom_out(&mut self) {
        if let Some(next) = self.zoom_level.zoomed_out() {
            self.zoom_level = next;
        }
    }

    /// Moves or clears the row cross-hair highlight.
    pub fn set_highlighted_row(&mut self, row: Option<usize>) {
        self.highlighted_row = row;
    }

    /// Moves or clears the column cross-hair highlight.
    pub fn set_highlighted_column(&mut self, column: Option<usize>) {
        self.highlighted_column = column;
    }

    /// Applies a queued [`Action`].
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::StartDragging(position) => self.start_dragging(position),
            Action::ContinueDragging(position) => self.continue_dragging(position),
            Action::StopDragging => self.stop_dragging(),
            Action::ToggleClue(id) => self.toggle_clue(id),
            Action::Undo => {
                let _ = self.undo();
            }
            Action::Redo => {
                let _ = self.redo();
            }
            Action::ZoomIn => self.zoom_in(),
            Action::ZoomOut => self.zoom_out(),
            Action::SetHighlightedRow(row) => self.set_highlighted_row(row),
            Action::SetHighlightedColumn(column) => self.set_highlighted_column(column),
            Action::Reset => self.reset(),
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the game is in authoring mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Whether every cell's mark is consistent with the ground truth.
    /// Always `false` in authoring mode.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Current display zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom_level
    }

    /// Highlighted row, if any.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        self.highlighted_row
    }

    /// Highlighted column, if any.
    #[must_use]
    pub fn highlighted_column(&self) -> Option<usize> {
        self.highlighted_column
    }

    /// Live feedback counts for the active drag.
    #[must_use]
    pub fn marked_cells_count(&self) -> MarkedCellsCount {
        self.marked_cells_count
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Axis the active drag is locked to, if any.
    #[must_use]
    pub fn drag_direction(&self) -> Option<DragDirection> {
        self.drag.and_then(|session| session.direction)
    }

    /// The player's marks as a row-major `'0'`/`'1'`/`'x'` string.
    #[must_use]
    pub fn user_solution(&self) -> &str {
        &self.user_solution
    }

    /// The ground truth as a row-major `'0'`/`'1'` string. In authoring
    /// mode this is the solution being authored.
    #[must_use]
    pub fn solution_string(&self) -> String {
        self.grid
            .iter()
            .flatten()
            .map(|cell| cell.value.to_solution_char())
            .collect()
    }

    /// The cell at `position`, or `None` out of bounds.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.get(position.row())?.get(position.column())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// The clue with the given id, or `None` if the id has been retired.
    #[must_use]
    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.clues.get(id)
    }

    /// Clue ids per row, indexed by row.
    #[must_use]
    pub fn row_clue_ids(&self) -> &[Vec<ClueId>] {
        self.clues.rows()
    }

    /// Clue ids per column, indexed by column.
    #[must_use]
    pub fn column_clue_ids(&self) -> &[Vec<ClueId>] {
        self.clues.columns()
    }

    /// Whether a gesture is available to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a gesture is available to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.grid
            .get_mut(position.row())?
            .get_mut(position.column())
    }

    fn clear_transients(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            cell.transient_value = None;
        }
    }

    fn drag_feedback(
        &self,
        start: Position,
        end: Position,
        direction: DragDirection,
    ) -> MarkedCellsCount {
        let (line, span, count): (Vec<CellValue>, _, _) = match direction {
            DragDirection::Horizontal => {
                let line = self.grid[start.row()]
                    .iter()
                    .map(|cell| cell.user_value)
                    .collect();
                let span = start.column().min(end.column())..=start.column().max(end.column());
                (line, span, start.column().abs_diff(end.column()) + 1)
            }
            DragDirection::Vertical => {
                let line = self
                    .grid
                    .iter()
                    .map(|row| row[start.column()].user_value)
                    .collect();
                let span = start.row().min(end.row())..=start.row().max(end.row());
                (line, span, start.row().abs_diff(end.row()) + 1)
            }
        };
        // The run is measured against the start cell's committed mark, so
        // the count shows how the gesture relates to the block it grew from.
        let value = self.grid[start.row()][start.column()].user_value;
        MarkedCellsCount {
            count,
            block_count: block_run(&line, span, value),
        }
    }

    /// Commits `value` to every listed cell and records one history entry.
    fn update_cells(&mut self, positions: &[Position], value: CellValue) {
        let is_editing = self.is_editing;
        let mut deltas = Vec::with_capacity(positions.len());
        for &position in positions {
            let Some(cell) = self.cell_mut(position) else {
                continue;
            };
            deltas.push(CellDelta {
                position,
                old_value: cell.user_value,
                new_value: value,
            });
            cell.user_value = value;
            cell.transient_value = None;
            if is_editing {
                cell.value = value;
                cell.is_valid = true;
            } else {
                cell.is_valid = is_cell_valid(cell.value, value);
            }
        }
        if deltas.is_empty() {
            return;
        }
        self.history.push(HistoryEntry::new(deltas));
        self.after_cells_changed();
    }

    /// Restores one history entry's marks; `revert` picks old over new.
    fn apply_history(&mut self, entry: &HistoryEntry, revert: bool) {
        let is_editing = self.is_editing;
        for delta in entry.cells() {
            let restored = if revert {
                delta.old_value
            } else {
                delta.new_value
            };
            let Some(cell) = self.cell_mut(delta.position) else {
                continue;
            };
            cell.user_value = restored;
            cell.transient_value = None;
            if is_editing {
                cell.value = restored;
                cell.is_valid = true;
            } else {
                cell.is_valid = is_cell_valid(cell.value, restored);
            }
        }
        self.after_cells_changed();
    }

    fn after_cells_changed(&mut self) {
        if self.is_editing {
            // The marks are the ground truth, so the clue set itself changes.
            self.clues.rebuild(&self.grid);
        } else {
            self.refresh_clue_validity();
        }
        self.refresh_completion();
        self.refresh_user_solution();
    }

    fn refresh_clue_validity(&mut self) {
        let grid = &self.grid;
        for clue in self.clues.clues_mut() {
            clue.is_valid = clue
                .cells
                .iter()
                .all(|position| grid[position.row()][position.column()].is_valid);
        }
    }

    fn refresh_completion(&mut self) {
        let complete = !self.is_editing
            && !self.grid.is_empty()
            && self.grid.iter().flatten().all(|cell| cell.is_valid);
        if complete && !self.is_complete {
            log::debug!("puzzle completed");
        }
        self.is_complete = complete;
    }

    fn refresh_user_solution(&mut self) {
        self.user_solution = self
            .grid
            .iter()
            .flatten()
            .map(|cell| cell.user_value.to_solution_char())
            .collect();
    }
}
